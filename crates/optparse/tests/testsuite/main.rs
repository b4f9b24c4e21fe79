mod greet;
mod parse;
mod util;
