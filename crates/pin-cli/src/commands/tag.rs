//! Tag command handlers

use anyhow::Result;
use tracing::debug;

use pin_core::{PinboardClient, TagOrdering, Transport};

use crate::output::Output;

/// List all tags with usage counts
///
/// Nothing is printed unless the whole listing was fetched and parsed.
pub fn list<T: Transport>(
    client: &PinboardClient<T>,
    ordering: TagOrdering,
    output: &Output,
) -> Result<()> {
    print!("{}", render_list(client, ordering, output)?);
    Ok(())
}

/// Fetch, sort and format the tag listing
fn render_list<T: Transport>(
    client: &PinboardClient<T>,
    ordering: TagOrdering,
    output: &Output,
) -> Result<String> {
    let mut tags = client.get_tags()?;
    debug!("Sorting {} tags by {:?}", tags.len(), ordering);
    ordering.sort(&mut tags);
    output.format_tags(&tags)
}

/// Rename a tag, or fold it into an existing one
pub fn rename<T: Transport>(
    client: &PinboardClient<T>,
    old: &str,
    new: &str,
    output: &Output,
) -> Result<()> {
    debug!("Renaming tag {:?} to {:?}", old, new);
    let body = client.rename_tag(old, new)?;
    output.print_raw(&body);
    Ok(())
}
