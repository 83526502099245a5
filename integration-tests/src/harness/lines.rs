//! Builders for the two request log formats.

pub fn app_line(
    date_time: &str,
    client: &str,
    user_id: u64,
    status: u16,
    ms: u64,
    path: &str,
) -> String {
    format!(
        "{date_time} INFO [zr] {client} GET {status} {ms}ms {path} ({user_id}@acme via ZulipElectron/5.11.1)"
    )
}

pub fn gateway_line(
    date_time: &str,
    client: &str,
    method: &str,
    path: &str,
    status: u16,
    host: &str,
    secs: &str,
) -> String {
    format!(
        r#"{client} - - [{date_time} +0000] "{method} {path} HTTP/1.1" {status} 1024 "-" "Mozilla/5.0 (X11; Linux x86_64)" {host} {secs}"#
    )
}
