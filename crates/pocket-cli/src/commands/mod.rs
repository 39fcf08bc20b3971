pub mod dispatch;

mod add;
mod cart;
mod chat;
mod context;
mod export;
mod products;
mod ranking;
mod report;
mod shared;
mod today;
mod trends;
