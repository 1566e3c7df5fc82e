use super::*;

#[test]
fn can_create_from_many_messages() {
    let error = GenericError::from(vec!["row 0".to_string(), "col 1".to_string()]);

    assert_eq!(error.to_string(), "row 0\ncol 1");
}

#[test]
fn can_create_from_io_error() {
    let error = GenericError::from(std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"));

    assert_eq!(error.to_string(), "no such file");
}
