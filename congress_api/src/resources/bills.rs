use serde_json::Value;

use crate::{
    family::ApiFamily,
    path::PathBuilder,
    types::{BillSubresource, BillType, Chamber, Unwrap},
    Client, Error,
};

/// Bills: details, related listings and recent activity per chamber.
///
/// `cosponsors`, `passed` and `major` are ProPublica only. The general `get`
/// and `recent` calls are sent to either family as asked.
#[derive(Clone, Debug)]
pub struct BillsClient {
    client: Client,
}

impl BillsClient {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Recent bills for a member. `bill_type` is one of introduced, updated,
    /// cosponsored or withdrawn.
    pub async fn by_member(&self, member_id: &str, bill_type: BillType) -> Result<Value, Error> {
        let path = PathBuilder::new("members/{id}/bills/{type}")
            .arg("id", member_id)
            .arg("type", bill_type)
            .build()?;
        self.client.fetch(&path, Unwrap::FirstResult).await
    }

    /// A bill (e.g. `hr1`), or one of its subresources.
    pub async fn get(
        &self,
        bill_id: &str,
        congress: Option<u32>,
        subresource: Option<BillSubresource>,
    ) -> Result<Value, Error> {
        let template = match subresource {
            Some(_) => "{congress}/bills/{bill_id}/{sub}",
            None => "{congress}/bills/{bill_id}",
        };
        let path = PathBuilder::new(template)
            .arg("congress", self.client.congress(congress))
            .arg("bill_id", bill_id)
            .arg_opt("sub", subresource)
            .build()?;
        self.client.fetch(&path, Unwrap::FirstResult).await
    }

    pub async fn amendments(&self, bill_id: &str, congress: Option<u32>) -> Result<Value, Error> {
        self.get(bill_id, congress, Some(BillSubresource::Amendments))
            .await
    }

    pub async fn related(&self, bill_id: &str, congress: Option<u32>) -> Result<Value, Error> {
        self.get(bill_id, congress, Some(BillSubresource::Related))
            .await
    }

    pub async fn subjects(&self, bill_id: &str, congress: Option<u32>) -> Result<Value, Error> {
        self.get(bill_id, congress, Some(BillSubresource::Subjects))
            .await
    }

    pub async fn cosponsors(&self, bill_id: &str, congress: Option<u32>) -> Result<Value, Error> {
        self.client.require_family(ApiFamily::ProPublica, "bills.cosponsors")?;
        self.get(bill_id, congress, Some(BillSubresource::Cosponsors))
            .await
    }

    /// Recent bills in a chamber, by listing type.
    pub async fn recent(
        &self,
        chamber: Chamber,
        congress: Option<u32>,
        bill_type: BillType,
    ) -> Result<Value, Error> {
        let path = PathBuilder::new("{congress}/{chamber}/bills/{type}")
            .arg("congress", self.client.congress(congress))
            .arg("chamber", chamber)
            .arg("type", bill_type)
            .build()?;
        self.client.fetch(&path, Unwrap::FirstResult).await
    }

    pub async fn introduced(&self, chamber: Chamber, congress: Option<u32>) -> Result<Value, Error> {
        self.recent(chamber, congress, BillType::Introduced).await
    }

    pub async fn updated(&self, chamber: Chamber, congress: Option<u32>) -> Result<Value, Error> {
        self.recent(chamber, congress, BillType::Updated).await
    }

    pub async fn passed(&self, chamber: Chamber, congress: Option<u32>) -> Result<Value, Error> {
        self.client.require_family(ApiFamily::ProPublica, "bills.passed")?;
        self.recent(chamber, congress, BillType::Passed).await
    }

    pub async fn major(&self, chamber: Chamber, congress: Option<u32>) -> Result<Value, Error> {
        self.client.require_family(ApiFamily::ProPublica, "bills.major")?;
        self.recent(chamber, congress, BillType::Major).await
    }
}
