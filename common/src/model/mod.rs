pub mod about;
pub mod contact;
pub mod content;
pub mod faq;
pub mod hero;
pub mod lead;
pub mod patch;
pub mod post;
pub mod product;
pub mod rating;
pub mod service;
pub mod social;
pub mod testimonial;
