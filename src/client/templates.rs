//! Built-in request-body templates.
//!
//! Each [`Client`](super::Client) seeds its own [`TemplateCache`] with these
//! at build time; additional templates can be registered through the builder
//! before construction if an embedder needs custom bodies.

use crate::api::TemplateCache;

pub(crate) const VALIDATE: &str = "Validate";
pub(crate) const ACCOUNT_REGISTRATION: &str = "AccountRegistration";
pub(crate) const REGISTER_FUNDRAISING_PAGE_FOR_EVENT: &str = "RegisterFundraisingPageForEvent";

const VALIDATE_TMPL: &str = r#"{
    "email": "{{email}}",
    "password": "{{password}}"
}"#;

const ACCOUNT_REGISTRATION_TMPL: &str = r#"{
    "acceptTermsAndConditions": true,
    "address": {
        "country": "{{country}}",
        "countyOrState": "{{county}}",
        "line1": "{{address_line1}}",
        "line2": "{{address_line2}}",
        "postcodeOrZipcode": "{{postcode}}",
        "townOrCity": "{{town_or_city}}"
    },
    "causeId": null,
    "email": "{{email}}",
    "firstName": "{{first_name}}",
    "lastName": "{{last_name}}",
    "password": "{{password}}",
    "reference": null,
    "title": "{{title}}"
}"#;

const REGISTER_FUNDRAISING_PAGE_FOR_EVENT_TMPL: &str = r#"{
  "charityId": {{charity_id}},
  "eventId": {{event_id}},
  "pageShortName": "{{page_short_name}}",
  "pageTitle": "{{page_title}}",
  "targetAmount": "{{target_amount}}",
  "platformOptIn": {{platform_opt_in}},
  "charityOptIn": {{charity_opt_in}},
  "charityFunded": {{charity_funded}},
  "pageStory": "{{page_story}}",
  "customCodes": {
    "customCode1": "{{custom_codes.[0]}}",
    "customCode2": "{{custom_codes.[1]}}",
    "customCode3": "{{custom_codes.[2]}}",
    "customCode4": "{{custom_codes.[3]}}",
    "customCode5": "{{custom_codes.[4]}}",
    "customCode6": "{{custom_codes.[5]}}"
  },{{#if images}}"images": [
    {{#each images}}{{#unless @first}},{{/unless}}{"caption": "{{caption}}","url": "{{url}}","isDefault": "{{@first}}"}{{/each}}
    ],{{/if}}
  "currency": "{{currency_code}}"{{#if team_id}},
  "teamId": {{team_id}}{{/if}}
}"#;

pub(crate) fn register_builtin(cache: &mut TemplateCache) {
    cache.register(VALIDATE, VALIDATE_TMPL);
    cache.register(ACCOUNT_REGISTRATION, ACCOUNT_REGISTRATION_TMPL);
    cache.register(
        REGISTER_FUNDRAISING_PAGE_FOR_EVENT,
        REGISTER_FUNDRAISING_PAGE_FOR_EVENT_TMPL,
    );
}
