use crate::domain::{
    BounceFilter, DEFAULT_PAGE_COUNT, DEFAULT_PAGE_OFFSET, InboundMessageFilter,
    OutboundMessageFilter,
};

pub fn encode_bounce_filter(filter: &BounceFilter) -> Vec<(String, String)> {
    let mut params = Vec::<(String, String)>::new();
    push_paging(&mut params, filter.count, filter.offset);
    push_opt(&mut params, "type", filter.bounce_type.as_deref());
    if let Some(inactive) = filter.inactive {
        params.push(("inactive".to_owned(), inactive.to_string()));
    }
    push_opt(&mut params, "emailFilter", filter.email_filter.as_deref());
    push_opt(&mut params, "tag", filter.tag.as_deref());
    push_opt(&mut params, "messageID", filter.message_id.as_deref());
    params
}

pub fn encode_outbound_filter(filter: &OutboundMessageFilter) -> Vec<(String, String)> {
    let mut params = Vec::<(String, String)>::new();
    push_paging(&mut params, filter.count, filter.offset);
    push_opt(&mut params, "recipient", filter.recipient.as_deref());
    push_opt(&mut params, "fromemail", filter.from_email.as_deref());
    push_opt(&mut params, "tag", filter.tag.as_deref());
    push_opt(&mut params, "subject", filter.subject.as_deref());
    push_opt(&mut params, "status", filter.status.as_deref());
    params
}

pub fn encode_inbound_filter(filter: &InboundMessageFilter) -> Vec<(String, String)> {
    let mut params = Vec::<(String, String)>::new();
    push_paging(&mut params, filter.count, filter.offset);
    push_opt(&mut params, "recipient", filter.recipient.as_deref());
    push_opt(&mut params, "fromemail", filter.from_email.as_deref());
    push_opt(&mut params, "subject", filter.subject.as_deref());
    push_opt(&mut params, "mailboxhash", filter.mailbox_hash.as_deref());
    push_opt(&mut params, "status", filter.status.as_deref());
    params
}

// Pagination is always sent explicitly; caller values win over the defaults.
fn push_paging(params: &mut Vec<(String, String)>, count: Option<u32>, offset: Option<u32>) {
    params.push((
        "count".to_owned(),
        count.unwrap_or(DEFAULT_PAGE_COUNT).to_string(),
    ));
    params.push((
        "offset".to_owned(),
        offset.unwrap_or(DEFAULT_PAGE_OFFSET).to_string(),
    ));
}

fn push_opt(params: &mut Vec<(String, String)>, key: &str, value: Option<&str>) {
    if let Some(value) = value {
        params.push((key.to_owned(), value.to_owned()));
    }
}
