//! Asynchronous form submission
//!
//! Forms with class `submit-by-fetch` are posted with a multipart body and
//! the `X-Requested-With: XMLHttpRequest` header. The JSON answer is painted
//! into the form: field errors next to their inputs, form-wide errors after
//! the submit button, the success message after every submit button unless
//! a follow-up handler is named in `data-run_next`.

pub mod payload;
pub mod pipeline;
pub mod response;
pub mod transport;

pub use pipeline::{FollowUp, FollowUps};
pub use response::{NON_FIELD_ERRORS, SubmitResponse};
#[cfg(target_arch = "wasm32")]
pub use transport::GlooTransport;
pub use transport::{REQUESTED_WITH, Transport};
