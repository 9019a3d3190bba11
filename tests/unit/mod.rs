mod test_config;
mod test_csv;
mod test_date;
mod test_model;
mod test_utils;
