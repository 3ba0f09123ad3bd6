use super::*;
use crate::constants::header;
use crate::response::ResponseParts;

mod new {
    use super::*;

    #[test]
    fn should_start_with_empty_headers_when_called() {
        // Arrange & Act
        let collection = HeaderCollection::new();

        // Assert
        assert!(collection.into_headers().is_empty());
    }
}

mod push {
    use super::*;

    #[test]
    fn should_keep_insertion_order() {
        // Arrange
        let mut collection = HeaderCollection::new();

        // Act
        collection.push(header::ACCESS_CONTROL_ALLOW_ORIGIN, "*");
        collection.push(header::ACCESS_CONTROL_ALLOW_CREDENTIALS, "true");
        collection.push(header::ACCESS_CONTROL_EXPOSE_HEADERS, "X-Trace");

        // Assert
        let names: Vec<_> = collection.into_headers().into_keys().collect();
        assert_eq!(
            names,
            vec![
                header::ACCESS_CONTROL_ALLOW_ORIGIN,
                header::ACCESS_CONTROL_ALLOW_CREDENTIALS,
                header::ACCESS_CONTROL_EXPOSE_HEADERS,
            ]
        );
    }

    #[test]
    fn should_replace_value_given_same_name() {
        // Arrange
        let mut collection = HeaderCollection::new();

        // Act
        collection.push(header::ACCESS_CONTROL_MAX_AGE, "10");
        collection.push(header::ACCESS_CONTROL_MAX_AGE, "20");

        // Assert
        let headers = collection.into_headers();
        assert_eq!(headers.len(), 1);
        assert_eq!(
            headers.get(header::ACCESS_CONTROL_MAX_AGE),
            Some(&"20".to_string())
        );
    }
}

mod push_opt {
    use super::*;

    #[test]
    fn should_skip_absent_values() {
        // Arrange
        let mut collection = HeaderCollection::new();

        // Act
        collection.push_opt(header::ACCESS_CONTROL_ALLOW_HEADERS, None);

        // Assert
        assert!(collection.into_headers().is_empty());
    }
}

mod apply_to {
    use super::*;
    use crate::response::CorsResponse;

    #[test]
    fn should_overwrite_existing_response_headers() {
        // Arrange
        let mut response =
            ResponseParts::new().with_header(header::ACCESS_CONTROL_ALLOW_ORIGIN, "old");
        let mut collection = HeaderCollection::new();
        collection.push(header::ACCESS_CONTROL_ALLOW_ORIGIN, "new");

        // Act
        collection.apply_to(&mut response);

        // Assert
        assert_eq!(
            response.header("access-control-allow-origin"),
            Some("new")
        );
    }
}
