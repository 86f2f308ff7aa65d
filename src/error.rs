use custom_error::custom_error;

pub type Result<T> = std::result::Result<T, Error>;

custom_error! {#[derive(PartialEq)] pub Error
    MissingParameter{stem: String} = "no value for request parameter '{stem}'",
    UnrecognizedIdentifier{value: String} = "'{value}' is neither a known fix, an airport, nor a coordinate",
    MalformedCoordinate{value: String} = "'{value}' is not a valid coordinate",
    IdentifierCollision{ids: String} = "identifiers defined as both fix and airport: {ids}",
    InvariantViolation{detail: String} = "reference data invariant violated: {detail}"
}
