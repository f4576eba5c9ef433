// Question answering: keyword classification, then a canned store query.
// Handlers build the store per request; resolver code only sees `&dyn UserStore`.

pub mod classifier;
pub mod handlers;
pub mod resolver;
