pub mod catalog;
pub mod element;
pub mod factorization;
pub mod monster;
