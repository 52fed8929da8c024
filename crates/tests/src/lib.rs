#[cfg(test)]
mod common;

#[cfg(test)]
mod sign_in_tests;

#[cfg(test)]
mod sign_out_tests;

#[cfg(test)]
mod session_tests;

#[cfg(test)]
mod health_tests;
