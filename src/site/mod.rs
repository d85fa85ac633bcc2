//! Landing page logic around the game
//!
//! Everything here is pure: the page script does the fetching and clock
//! reading and passes the results in.

pub mod countdown;
pub mod status;

pub use countdown::{Countdown, next_restart};
pub use status::{PlayerStatus, connect_url, member_count_text};
