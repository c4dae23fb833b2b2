use crate::{
    error::Result,
    models::{platform::DeviceList, DateRange, Device, PlatformStatus, UsageStats},
    transport::Transport,
};

#[derive(Debug, Clone)]
pub struct UsageClient {
    transport: Transport,
}

impl UsageClient {
    pub fn new(transport: Transport) -> Self {
        Self { transport }
    }

    pub async fn get(&self, range: DateRange) -> Result<UsageStats> {
        self.transport.get("/usage", &range.to_query()).await
    }
}

#[derive(Debug, Clone)]
pub struct DevicesClient {
    transport: Transport,
}

impl DevicesClient {
    pub fn new(transport: Transport) -> Self {
        Self { transport }
    }

    pub async fn list(&self) -> Result<Vec<Device>> {
        let list: DeviceList = self.transport.get("/devices", &[]).await?;
        Ok(list.devices)
    }
}

#[derive(Debug, Clone)]
pub struct StatusClient {
    transport: Transport,
}

impl StatusClient {
    pub fn new(transport: Transport) -> Self {
        Self { transport }
    }

    pub async fn get(&self) -> Result<PlatformStatus> {
        self.transport.get("/status", &[]).await
    }
}
