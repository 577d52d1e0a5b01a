use reqwest::Client;
use serde::{Serialize, de::DeserializeOwned};

/// Issues an authorized GET and deserializes the JSON response body.
///
/// One network round trip per call. The bearer credential is attached to
/// the request; an invalid or expired credential surfaces as a failed
/// call here, obtaining a fresh one beforehand is the caller's job.
///
/// # Errors
///
/// Returns `reqwest::Error` on network failure, on a non-success status
/// code, or when the body does not match `T`.
pub async fn get<T: DeserializeOwned>(token: &str, url: &str) -> Result<T, reqwest::Error> {
    let client = Client::new();
    let response = client
        .get(url)
        .bearer_auth(token)
        .send()
        .await?
        .error_for_status()?;

    response.json::<T>().await
}

/// Like [`get`], with additional query parameters appended to the URL.
pub async fn get_with_query<T: DeserializeOwned>(
    token: &str,
    url: &str,
    query: &[(String, String)],
) -> Result<T, reqwest::Error> {
    let client = Client::new();
    let response = client
        .get(url)
        .bearer_auth(token)
        .query(query)
        .send()
        .await?
        .error_for_status()?;

    response.json::<T>().await
}

/// Issues an authorized POST with a JSON body and deserializes the
/// response.
pub async fn post<B: Serialize, T: DeserializeOwned>(
    token: &str,
    url: &str,
    body: &B,
) -> Result<T, reqwest::Error> {
    let client = Client::new();
    let response = client
        .post(url)
        .bearer_auth(token)
        .json(body)
        .send()
        .await?
        .error_for_status()?;

    response.json::<T>().await
}

/// Issues an authorized POST whose payload travels in the query string,
/// discarding the response body.
pub async fn post_query(
    token: &str,
    url: &str,
    query: &[(&str, String)],
) -> Result<(), reqwest::Error> {
    let client = Client::new();
    client
        .post(url)
        .bearer_auth(token)
        .query(query)
        .send()
        .await?
        .error_for_status()?;

    Ok(())
}

/// Issues an authorized DELETE with a JSON body, discarding the response
/// body.
pub async fn delete_with_body<B: Serialize>(
    token: &str,
    url: &str,
    body: &B,
) -> Result<(), reqwest::Error> {
    let client = Client::new();
    client
        .delete(url)
        .bearer_auth(token)
        .json(body)
        .send()
        .await?
        .error_for_status()?;

    Ok(())
}
