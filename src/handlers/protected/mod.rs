pub mod districts;
pub mod states;

pub use districts::{district_delete, district_get, district_post, district_put};
pub use states::{state_get, state_stats, states_list};
