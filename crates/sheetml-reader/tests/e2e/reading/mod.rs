mod errors;
mod filtering;
mod listeners;
mod model;
