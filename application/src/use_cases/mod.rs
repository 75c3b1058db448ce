//! Use cases (application services)

pub mod game_session;
pub mod lookup_question;
pub mod round_log;
pub mod run_effect;

#[cfg(test)]
pub(crate) mod test_support;
