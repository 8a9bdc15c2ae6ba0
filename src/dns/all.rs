//! Queries every supported record type for a name.

use strum::IntoEnumIterator;

use super::{DnsClient, RecordKind, ResourceRecord};
use crate::domain::DomainParser;
use crate::error_handling::ProbeError;
use crate::wildcard::WildcardProber;

/// Queries `name` for every [`RecordKind`].
///
/// Answers of a type for which `name` is covered by a wildcard are left out,
/// since they say nothing about `name` itself.
///
/// # Returns
///
/// The records found and the failures met on the way. A failed type does not
/// stop the others; an invalid name stops everything. Answers are kept when
/// the wildcard check itself fails.
pub async fn query_all(
    client: &DnsClient,
    parser: &DomainParser,
    name: &str,
) -> (Vec<ResourceRecord>, Vec<ProbeError>) {
    let mut records = Vec::new();
    let mut errors = Vec::new();

    if let Err(e) = parser.validate(name) {
        errors.push(e.into());
        return (records, errors);
    }

    for kind in RecordKind::iter() {
        let answers = match client.lookup(name, kind).await {
            Ok(answers) => answers,
            Err(e) => {
                errors.push(e.into());
                Vec::new()
            }
        };
        if answers.is_empty() {
            continue;
        }

        let prober = WildcardProber::new(parser.clone(), client.probe(Some(kind)));
        match prober.is_wildcard(name).await {
            Ok(false) => records.extend(answers),
            Ok(true) => log::debug!("Skipping {kind} answers for {name}: wildcard"),
            Err(e) => {
                errors.push(e);
                records.extend(answers);
            }
        }
    }

    (records, errors)
}
