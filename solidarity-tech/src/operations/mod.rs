//! Operation methods on [`SolidarityTech`](crate::SolidarityTech), one per
//! catalog entry, grouped by area.

mod events;
mod outreach;
mod people;
mod tasks;
