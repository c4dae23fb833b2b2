use crate::{
    error::Result,
    models::{
        DateRange, HardwareRental, HardwareRentalRequest, ProviderEarnings, ProviderRegistration,
        ProviderRegistrationResult,
    },
    transport::Transport,
};

#[derive(Debug, Clone)]
pub struct ProviderClient {
    transport: Transport,
}

impl ProviderClient {
    pub fn new(transport: Transport) -> Self {
        Self { transport }
    }

    pub async fn register(
        &self,
        registration: ProviderRegistration,
    ) -> Result<ProviderRegistrationResult> {
        log::info!(
            "Registering provider {} ({} x{})",
            registration.name,
            registration.hardware_type,
            registration.compute_units
        );
        self.transport
            .post("/provider/register", &registration)
            .await
    }

    pub async fn earnings(&self, range: DateRange) -> Result<ProviderEarnings> {
        self.transport
            .get("/provider/earnings", &range.to_query())
            .await
    }
}

#[derive(Debug, Clone)]
pub struct HardwareClient {
    transport: Transport,
}

impl HardwareClient {
    pub fn new(transport: Transport) -> Self {
        Self { transport }
    }

    pub async fn rent(&self, request: HardwareRentalRequest) -> Result<HardwareRental> {
        log::info!(
            "Renting {} x{} for {}h",
            request.gpu_type,
            request.gpu_count,
            request.duration_hours
        );
        self.transport.post("/hardware/rent", &request).await
    }
}
