use serde_json::Value;

use crate::{
    family::ApiFamily,
    path::PathBuilder,
    types::{BillType, Chamber, CompareType, Unwrap},
    Client, Error,
};

/// Members of Congress, looked up by Bioguide ID or listed by chamber.
///
/// `new_members`, `departing`, `compare` and `party` are ProPublica only and
/// fail with `InvalidArgument` on an NYT client without sending a request.
#[derive(Clone, Debug)]
pub struct MembersClient {
    client: Client,
}

impl MembersClient {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Takes a Bioguide ID, returns a legislator.
    pub async fn get(&self, member_id: &str) -> Result<Value, Error> {
        let path = PathBuilder::new("members/{id}").arg("id", member_id).build()?;
        self.client.fetch(&path, Unwrap::FirstResult).await
    }

    /// Lists members of a chamber in a Congress, or the current members for a
    /// state (and district).
    ///
    /// ProPublica serves state listings from dedicated paths and ignores the
    /// Congress number for them; a district without a state is ignored. The NYT
    /// API takes state and district as query parameters.
    pub async fn filter(
        &self,
        chamber: Chamber,
        congress: Option<u32>,
        state: Option<&str>,
        district: Option<u32>,
    ) -> Result<Value, Error> {
        let congress = self.client.congress(congress);
        let builder = match (self.client.family(), state, district) {
            (ApiFamily::ProPublica, Some(state), Some(district)) => {
                PathBuilder::new("members/{chamber}/{state}/{district}/current")
                    .arg("chamber", chamber)
                    .arg("state", state)
                    .arg("district", district)
            }
            (ApiFamily::ProPublica, Some(state), None) => {
                PathBuilder::new("members/{chamber}/{state}/current")
                    .arg("chamber", chamber)
                    .arg("state", state)
            }
            (ApiFamily::ProPublica, None, _) => PathBuilder::new("{congress}/{chamber}/members")
                .arg("congress", congress)
                .arg("chamber", chamber),
            (ApiFamily::NewYorkTimes, state, district) => {
                PathBuilder::new("{congress}/{chamber}/members")
                    .arg("congress", congress)
                    .arg("chamber", chamber)
                    .arg_opt("state", state)
                    .arg_opt("district", district)
            }
        };
        self.client.fetch(&builder.build()?, Unwrap::FirstResult).await
    }

    /// Same as [`BillsClient::by_member`](crate::BillsClient::by_member).
    pub async fn bills(&self, member_id: &str, bill_type: BillType) -> Result<Value, Error> {
        let path = PathBuilder::new("members/{id}/bills/{type}")
            .arg("id", member_id)
            .arg("type", bill_type)
            .build()?;
        self.client.fetch(&path, Unwrap::FirstResult).await
    }

    /// Members who recently joined Congress.
    pub async fn new_members(&self) -> Result<Value, Error> {
        self.client.require_family(ApiFamily::ProPublica, "members.new_members")?;
        let path = PathBuilder::new("members/new").build()?;
        self.client.fetch(&path, Unwrap::FirstResult).await
    }

    /// Members leaving a chamber at the end of a Congress.
    pub async fn departing(&self, chamber: Chamber, congress: Option<u32>) -> Result<Value, Error> {
        self.client.require_family(ApiFamily::ProPublica, "members.departing")?;
        let path = PathBuilder::new("{congress}/{chamber}/members/leaving")
            .arg("congress", self.client.congress(congress))
            .arg("chamber", chamber)
            .build()?;
        self.client.fetch(&path, Unwrap::FirstResult).await
    }

    /// How often two members voted together, or cosponsored the same bills,
    /// in a chamber during one Congress.
    pub async fn compare(
        &self,
        first: &str,
        second: &str,
        chamber: Chamber,
        compare_type: CompareType,
        congress: Option<u32>,
    ) -> Result<Value, Error> {
        self.client.require_family(ApiFamily::ProPublica, "members.compare")?;
        let path = PathBuilder::new("members/{first}/{type}/{second}/{congress}/{chamber}")
            .arg("first", first)
            .arg("type", compare_type)
            .arg("second", second)
            .arg("congress", self.client.congress(congress))
            .arg("chamber", chamber)
            .build()?;
        self.client.fetch(&path, Unwrap::FirstResult).await
    }

    /// Party membership counts per state for the current Congress.
    pub async fn party(&self) -> Result<Value, Error> {
        self.client.require_family(ApiFamily::ProPublica, "members.party")?;
        let path = PathBuilder::new("states/members/party").build()?;
        self.client.fetch(&path, Unwrap::FullResults).await
    }
}
