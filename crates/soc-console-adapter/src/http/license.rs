/*
[INPUT]:  License keys, checkout payloads and customer emails
[OUTPUT]: License, feature and checkout session envelopes
[POS]:    HTTP layer - license management endpoints
[UPDATE]: When adding new license endpoints or changing payload shape
*/

use crate::http::{ConsoleClient, Result};
use crate::types::{
    BaseResponse, CheckoutPayload, CheckoutSessionResponse, CreateLicenseRequest,
    LicenseFeaturesResponse, LicenseKeyResponse, NewLicensePayload, ReplaceLicenseRequest,
    RetrieveLicenseRequest, SubscriptionFeaturesResponse, VerifyLicenseResponse,
};

impl ConsoleClient {
    /// Fetch the stored license key
    ///
    /// GET /license/get_license
    pub async fn get_license(&self) -> Result<LicenseKeyResponse> {
        self.send_json(self.get("/license/get_license")).await
    }

    /// List purchasable subscription features
    ///
    /// GET /license/subscription_features
    pub async fn get_subscription_features(&self) -> Result<SubscriptionFeaturesResponse> {
        self.send_json(self.get("/license/subscription_features"))
            .await
    }

    /// Verify the current license
    ///
    /// GET /license/verify_license
    pub async fn verify_license(&self) -> Result<VerifyLicenseResponse> {
        self.send_json(self.get("/license/verify_license")).await
    }

    /// List features unlocked by the current license
    ///
    /// GET /license/get_license_features
    pub async fn get_license_features(&self) -> Result<LicenseFeaturesResponse> {
        self.send_json(self.get("/license/get_license_features"))
            .await
    }

    /// Replace the stored license key
    ///
    /// POST /license/replace_license_in_db
    pub async fn replace_license(&self, license_key: &str) -> Result<BaseResponse> {
        let body = ReplaceLicenseRequest {
            license_key: license_key.to_string(),
        };
        let request = self.post("/license/replace_license_in_db").json(&body)?;
        self.send_json(request).await
    }

    /// Start a checkout session
    ///
    /// POST /license/create_checkout_session
    pub async fn create_checkout_session(
        &self,
        payload: &CheckoutPayload,
    ) -> Result<CheckoutSessionResponse> {
        let request = self
            .post("/license/create_checkout_session")
            .json(payload)?;
        self.send_json(request).await
    }

    /// Look up a license key by customer email
    ///
    /// POST /license/retrieve_license_by_email
    pub async fn retrieve_license_by_email(&self, email: &str) -> Result<LicenseKeyResponse> {
        let body = RetrieveLicenseRequest {
            email: email.to_string(),
        };
        let request = self
            .post("/license/retrieve_license_by_email")
            .json(&body)?;
        self.send_json(request).await
    }

    /// Extend the license period
    ///
    /// POST /license/extend_license?period={period}
    #[deprecated(note = "license extension is handled by checkout sessions")]
    pub async fn extend_license(&self, period: u32) -> Result<BaseResponse> {
        let request = self
            .post("/license/extend_license")
            .query("period", period)
            .json(&serde_json::json!({}))?;
        self.send_json(request).await
    }

    /// Create a trial license key
    ///
    /// POST /license/create_new_key
    #[deprecated(note = "trial keys are issued through checkout sessions")]
    pub async fn create_license(&self, payload: NewLicensePayload) -> Result<BaseResponse> {
        let body = CreateLicenseRequest::from(payload);
        let request = self.post("/license/create_new_key").json(&body)?;
        self.send_json(request).await
    }
}
