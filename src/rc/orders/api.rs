//! Orders API operations

use crate::config::api;
use crate::error::Result;
use crate::rc::{RcClient, Record};

use super::ORDER_LABEL;

impl RcClient {
    /// Get all orders visible to the token
    pub async fn fetch_orders(&self, field_order: Option<&[&str]>) -> Result<Vec<Record>> {
        self.fetch_resource(api::ORDERS, ORDER_LABEL, api::OBJECTS_FIELD, field_order)
            .await
    }
}
