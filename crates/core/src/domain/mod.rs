pub mod contract;
pub mod grade;
pub mod market;
pub mod oracle;
pub mod portfolio;
