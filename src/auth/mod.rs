// Authentication helpers
// Bearer tokens are issued and verified here; extraction lives in api::middleware

pub mod jwt;
