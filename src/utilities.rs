pub mod api_utils;

#[cfg(test)]
pub mod test_fixtures;
