pub mod suite_repo;

pub use suite_repo::SuiteRepo;
