use serde_json::Value;

use crate::{
    path::PathBuilder,
    types::{Chamber, Unwrap},
    Client, Error,
};

/// Standing committees of a chamber.
#[derive(Clone, Debug)]
pub struct CommitteesClient {
    client: Client,
}

impl CommitteesClient {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Committees of a chamber in a Congress.
    pub async fn filter(&self, chamber: Chamber, congress: Option<u32>) -> Result<Value, Error> {
        let path = PathBuilder::new("{congress}/{chamber}/committees")
            .arg("congress", self.client.congress(congress))
            .arg("chamber", chamber)
            .build()?;
        self.client.fetch(&path, Unwrap::FirstResult).await
    }

    /// One committee (e.g. `HSAG`) with its membership.
    pub async fn get(
        &self,
        chamber: Chamber,
        committee_id: &str,
        congress: Option<u32>,
    ) -> Result<Value, Error> {
        let path = PathBuilder::new("{congress}/{chamber}/committees/{committee}")
            .arg("congress", self.client.congress(congress))
            .arg("chamber", chamber)
            .arg("committee", committee_id)
            .build()?;
        self.client.fetch(&path, Unwrap::FirstResult).await
    }
}
