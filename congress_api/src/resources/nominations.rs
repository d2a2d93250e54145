use serde_json::Value;

use crate::{
    path::PathBuilder,
    types::{NomineeType, Unwrap},
    Client, Error,
};

/// Presidential nominations sent to the Senate.
#[derive(Clone, Debug)]
pub struct NominationsClient {
    client: Client,
}

impl NominationsClient {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Nominees by listing: received, updated, confirmed or withdrawn.
    pub async fn filter(
        &self,
        nominee_type: NomineeType,
        congress: Option<u32>,
    ) -> Result<Value, Error> {
        let path = PathBuilder::new("{congress}/nominees/{type}")
            .arg("congress", self.client.congress(congress))
            .arg("type", nominee_type)
            .build()?;
        self.client.fetch(&path, Unwrap::FirstResult).await
    }

    /// A single nomination by its ID (e.g. `PN40`).
    pub async fn get(&self, nominee_id: &str, congress: Option<u32>) -> Result<Value, Error> {
        let path = PathBuilder::new("{congress}/nominees/{nominee}")
            .arg("congress", self.client.congress(congress))
            .arg("nominee", nominee_id)
            .build()?;
        self.client.fetch(&path, Unwrap::FirstResult).await
    }

    /// Every nominee from a state, as a list.
    pub async fn by_state(&self, state: &str, congress: Option<u32>) -> Result<Value, Error> {
        let path = PathBuilder::new("{congress}/nominees/state/{state}")
            .arg("congress", self.client.congress(congress))
            .arg("state", state)
            .build()?;
        self.client.fetch(&path, Unwrap::FullResults).await
    }
}
