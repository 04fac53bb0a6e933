//! Risk calculations that turn a dollar risk budget into a share count.

pub mod sizing;
