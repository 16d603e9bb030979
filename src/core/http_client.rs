use reqwest::Client;

/// Shared client for talking to the inference backend. No request timeout is
/// set: model generation can legitimately run for a long time, and the source
/// system has no cancellation path (see DESIGN.md).
pub fn build_http_client(disable_proxy: bool) -> Result<Client, reqwest::Error> {
    let mut builder = Client::builder().user_agent("symptom-referral-server/0.1");

    if disable_proxy {
        builder = builder.no_proxy();
    }

    builder.build()
}
