//! Account operations.

use serde::{Deserialize, Serialize};

use crate::models::{Account, AccountValidator};
use crate::{Error, Result};

use super::{templates, Client, CONTENT_TYPE, OPERATION_HEADER};

const AVAILABILITY_OPERATION: &str = "AccountApi:AccountAvailabilityCheck";

impl Client {
    /// Check the availability of a platform account by email address.
    ///
    /// Returns `Ok(true)` when the address is free and `Ok(false)` when an
    /// account already exists.
    pub async fn account_availability_check(&self, email: &str) -> Result<bool> {
        let path = self.path(&format!("/v1/account/{email}"));
        let (res, _) = self
            .dispatch("AccountAvailabilityCheck", "HEAD", &path, None)
            .await?;

        // 404 doubles as success (available), so only trust it when the
        // response names the expected platform operation.
        let operation = res.header(OPERATION_HEADER).unwrap_or_default();
        if operation != AVAILABILITY_OPERATION {
            tracing::warn!(received = operation, "unexpected operation header");
            return Err(Error::UnexpectedOperation {
                expected: AVAILABILITY_OPERATION.to_string(),
                received: operation.to_string(),
            });
        }

        match res.status().as_u16() {
            404 => Ok(true),
            200 => Ok(false),
            status => Err(Error::invalid_response(status)),
        }
    }

    /// Validate a set of user credentials against the platform database.
    pub async fn validate(&self, email: &str, password: &str) -> Result<bool> {
        #[derive(Serialize)]
        struct Credentials<'a> {
            email: &'a str,
            password: &'a str,
        }

        #[derive(Deserialize)]
        struct Validation {
            #[serde(rename = "isValid")]
            is_valid: bool,
        }

        let body =
            self.templates
                .build(templates::VALIDATE, &Credentials { email, password }, CONTENT_TYPE)?;
        let path = self.path("/v1/account/validate");
        let (res, res_body) = self.dispatch("Validate", "POST", &path, Some(body)).await?;

        if res.status().as_u16() != 200 {
            return Err(Error::invalid_response(res.status().as_u16()));
        }
        let validation: Validation = serde_json::from_str(&res_body)?;
        Ok(validation.is_valid)
    }

    /// Register a new user account with the platform.
    ///
    /// On rejection the request payload is re-validated locally and against
    /// the countries list, and the findings are folded into the error.
    pub async fn account_registration(&self, account: &Account) -> Result<()> {
        let body = self
            .templates
            .build(templates::ACCOUNT_REGISTRATION, account, CONTENT_TYPE)?;
        let path = self.path("/v1/account/");
        let (res, _) = self
            .dispatch("AccountRegistration", "PUT", &path, Some(body))
            .await?;

        let status = res.status().as_u16();
        if status != 200 {
            let findings = match account.has_valid_country(self).await {
                Err(err) => format!("errors running validation {err}"),
                Ok(false) => "invalid Country".to_string(),
                Ok(true) => "no errors found".to_string(),
            };
            return Err(Error::invalid_response_with_detail(
                status,
                format!("result of running validation on request payload was: {findings}"),
            ));
        }
        Ok(())
    }

    /// Check a country name against the platform's published countries list.
    pub async fn is_valid_country(&self, name: &str) -> Result<bool> {
        #[derive(Deserialize)]
        struct Country {
            name: String,
        }

        let path = self.path("/v1/countries");
        let (res, res_body) = self.dispatch("IsValidCountry", "GET", &path, None).await?;
        if res.status().as_u16() != 200 {
            return Err(Error::invalid_response(res.status().as_u16()));
        }
        let countries: Vec<Country> = serde_json::from_str(&res_body)?;
        Ok(countries.iter().any(|c| c.name == name))
    }

    /// Ask the platform to send a password reset email.
    pub async fn request_password_reminder(&self, email: &str) -> Result<()> {
        let path = self.path(&format!("/v1/account/{email}/requestpasswordreminder"));
        let (res, _) = self
            .dispatch("RequestPasswordReminder", "GET", &path, None)
            .await?;
        if res.status().as_u16() != 200 {
            return Err(Error::invalid_response(res.status().as_u16()));
        }
        Ok(())
    }
}

impl AccountValidator for Client {
    async fn is_valid_country(&self, name: &str) -> Result<bool> {
        Client::is_valid_country(self, name).await
    }
}
