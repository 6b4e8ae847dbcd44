//! Minimal blocking HTTP client helpers (libcurl easy) for driving the file
//! server in integration tests.

/// Status, body and content type of one response.
pub struct HttpReply {
    pub code: u32,
    pub body: Vec<u8>,
    pub content_type: Option<String>,
}

pub fn get(url: &str) -> HttpReply {
    let easy = curl::easy::Easy::new();
    perform(easy, url, None)
}

pub fn head(url: &str) -> HttpReply {
    let mut easy = curl::easy::Easy::new();
    easy.nobody(true).unwrap();
    perform(easy, url, None)
}

pub fn put(url: &str, body: &[u8]) -> HttpReply {
    let mut easy = curl::easy::Easy::new();
    easy.put(true).unwrap();
    easy.in_filesize(body.len() as u64).unwrap();
    perform(easy, url, Some(body))
}

pub fn post(url: &str, body: &[u8]) -> HttpReply {
    let mut easy = curl::easy::Easy::new();
    easy.upload(true).unwrap();
    easy.in_filesize(body.len() as u64).unwrap();
    easy.custom_request("POST").unwrap();
    perform(easy, url, Some(body))
}

pub fn delete(url: &str) -> HttpReply {
    let mut easy = curl::easy::Easy::new();
    easy.custom_request("DELETE").unwrap();
    perform(easy, url, None)
}

/// Issue a request with an arbitrary method and no body.
pub fn custom(method: &str, url: &str) -> HttpReply {
    let mut easy = curl::easy::Easy::new();
    easy.custom_request(method).unwrap();
    perform(easy, url, None)
}

fn perform(mut easy: curl::easy::Easy, url: &str, upload_body: Option<&[u8]>) -> HttpReply {
    easy.url(url).unwrap();
    // Send request paths as written; the traversal tests need `..` to reach
    // the server instead of being squashed client-side.
    easy.path_as_is(true).unwrap();
    let mut body = Vec::new();
    {
        let mut transfer = easy.transfer();
        if let Some(bytes) = upload_body {
            let mut remaining = bytes;
            transfer
                .read_function(move |into| {
                    let n = remaining.len().min(into.len());
                    into[..n].copy_from_slice(&remaining[..n]);
                    remaining = &remaining[n..];
                    Ok(n)
                })
                .unwrap();
        }
        transfer
            .write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })
            .unwrap();
        transfer.perform().unwrap();
    }
    let code = easy.response_code().unwrap();
    let content_type = easy.content_type().unwrap().map(|s| s.to_string());
    HttpReply {
        code,
        body,
        content_type,
    }
}
