use crate::filter::types::FilterKind;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FilterError {
    #[error("unable to classify filter term '{token}'")]
    Unclassifiable { token: String },

    #[error("more than one {kind} filter: '{existing}' and '{token}'")]
    Duplicate {
        kind: FilterKind,
        existing: String,
        token: String,
    },

    #[error("user id filter '{token}' cannot be used on gateway logs, which carry no user ids")]
    UserIdInGatewayMode { token: String },

    #[error("full hostname filter '{token}' only applies to gateway logs; pass --nginx or filter on the subdomain label")]
    FullHostnameInAppMode { token: String },

    #[error("filter term '{token}' is not a valid calendar date")]
    InvalidDate { token: String },
}
