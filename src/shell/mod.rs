// Composition root for the counters service.
//
// Responsibilities
// - Read config from environment.
// - Instantiate the counter store and hand it to the request layer.
// - Expose the HTTP router to the binary.

pub mod config;
pub mod http;
pub mod state;
