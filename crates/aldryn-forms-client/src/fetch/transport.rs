//! HTTP transport of the submit pipeline

use aldryn_forms_dom::FormEntry;
use async_trait::async_trait;

use crate::error::FetchError;

/// Header marking the request as asynchronous for the server-side view
pub const REQUESTED_WITH: (&str, &str) = ("X-Requested-With", "XMLHttpRequest");

/// Sends a multipart POST and returns the response body
#[async_trait(?Send)]
pub trait Transport<F> {
	/// POSTs `entries` to `action`
	async fn post(&self, action: &str, entries: Vec<FormEntry<F>>) -> Result<String, FetchError>;
}

/// `fetch`-based transport
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone, Copy, Default)]
pub struct GlooTransport;

#[cfg(target_arch = "wasm32")]
#[async_trait(?Send)]
impl Transport<web_sys::File> for GlooTransport {
	async fn post(
		&self,
		action: &str,
		entries: Vec<FormEntry<web_sys::File>>,
	) -> Result<String, FetchError> {
		use gloo_net::http::Request;

		let network = |e: gloo_net::Error| FetchError::Network(e.to_string());
		let body = aldryn_forms_dom::WebDom::to_form_data(&entries)
			.map_err(|e| FetchError::Network(e.to_string()))?;
		let (name, value) = REQUESTED_WITH;
		let response = Request::post(action)
			.header(name, value)
			.body(body)
			.map_err(network)?
			.send()
			.await
			.map_err(network)?;
		response.text().await.map_err(network)
	}
}
