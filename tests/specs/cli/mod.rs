mod errors;
mod help;
