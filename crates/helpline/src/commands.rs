//! Non-interactive subcommands (`list`, `call`).

use color_eyre::{Result, eyre::eyre};
use directory::{Category, Contact, ContactStore, DialAddress, DialError, filter};
use tracing::info;

use crate::{
    config::Config,
    dialer::{DialerGateway, SystemDialer},
};

/// Print the filtered directory as tab separated `name  number  type` lines.
pub fn list(query: &str, category: Option<Category>) {
    for line in list_lines(&ContactStore::with_seed(), query, category) {
        println!("{line}");
    }
}

pub fn list_lines(store: &ContactStore, query: &str, category: Option<Category>) -> Vec<String> {
    filter(&store.snapshot(), query)
        .into_iter()
        .filter(|c| category.map_or(true, |cat| c.category() == cat))
        .map(|c| format!("{}\t{}\t{}", c.name(), c.phone_number(), c.category()))
        .collect()
}

/// First contact (in display order) matching the query.
pub fn first_match(store: &ContactStore, query: &str) -> Option<Contact> {
    filter(&store.snapshot(), query).into_iter().next()
}

/// Call the first seed contact matching `query` through the system dialer.
pub fn call(config: &Config, query: &str) -> Result<()> {
    let store = ContactStore::with_seed();
    let dialer = SystemDialer::new(&config.dialer);
    let message = place_call(&store, &dialer, &config.dialer.scheme, query)?;
    println!("{message}");
    Ok(())
}

fn place_call(
    store: &ContactStore,
    dialer: &dyn DialerGateway,
    scheme: &str,
    query: &str,
) -> Result<String> {
    let contact =
        first_match(store, query).ok_or_else(|| eyre!("no contact matches {query:?}"))?;
    let address = DialAddress::with_scheme(contact.phone_number(), scheme)?;
    if !dialer.can_open(&address) {
        return Err(DialError::Unavailable {
            scheme: address.scheme().to_string(),
            handler: dialer.handler(),
        }
        .into());
    }
    info!("calling {} via {}", contact.name(), address);
    let outcome = dialer.open(&address)?;
    if outcome.opened {
        Ok(format!("Calling {} ({})", contact.name(), address.number()))
    } else {
        Err(DialError::NotCompleted {
            number: address.number().to_string(),
            reason: format!("{} reported a failure", dialer.handler()),
        }
        .into())
    }
}
