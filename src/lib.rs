pub mod assets;
pub mod carousel;
pub mod catalog;
pub mod config;
pub mod content;
pub mod documents;
pub mod humanize;
pub mod observability;
pub mod site;
pub mod web;
