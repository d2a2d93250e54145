use congress_api::{ApiFamily, Chamber, Client, ClientConfig, EndpointPath, PathBuilder};

fn client(family: ApiFamily) -> Client {
    Client::new(family, ClientConfig::new("secret").without_cache()).unwrap()
}

#[test]
fn propublica_member_url() {
    let path = PathBuilder::new("members/{id}")
        .arg("id", "P000197")
        .build()
        .unwrap();
    let url = client(ApiFamily::ProPublica).url_for(&path).unwrap();
    insta::assert_snapshot!(url.as_str(), @"https://api.propublica.org/congress/v1/members/P000197.json");
}

#[test]
fn propublica_vote_range_url() {
    let path = PathBuilder::new("{chamber}/votes/{start}/{end}")
        .arg("chamber", Chamber::House)
        .date("start", "January 5, 2010")
        .date("end", "2010-01-28")
        .build()
        .unwrap();
    let url = client(ApiFamily::ProPublica).url_for(&path).unwrap();
    insta::assert_snapshot!(url.as_str(), @"https://api.propublica.org/congress/v1/house/votes/2010-01-05/2010-01-28.json");
}

#[test]
fn nyt_url_keeps_extra_arguments_as_query() {
    let path = PathBuilder::new("{congress}/{chamber}/members")
        .arg("congress", 111)
        .chamber("chamber", "House")
        .arg("state", "ca")
        .build()
        .unwrap();
    let url = client(ApiFamily::NewYorkTimes).url_for(&path).unwrap();
    insta::assert_snapshot!(url.as_str(), @"http://api.nytimes.com/svc/politics/v3/us/legislative/congress/111/house/members.json?state=ca");
}

#[test]
fn url_never_contains_api_key() {
    for family in [ApiFamily::ProPublica, ApiFamily::NewYorkTimes] {
        let url = client(family)
            .url_for(&EndpointPath::new("members/new"))
            .unwrap();
        assert!(!url.as_str().contains("secret"));
    }
}
