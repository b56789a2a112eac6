pub mod home_vs_rent;
pub mod mortgage_invest;
