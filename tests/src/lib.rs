#![cfg(test)]

mod loading;
mod submission;
mod util;
