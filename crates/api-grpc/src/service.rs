// Re-export the proto module from the shared `api-shared` crate so callers
// can reference `api_grpc::pb`.
pub use api_shared::pb;

use api_shared::pb::tmr_server::Tmr;
use api_shared::pb::{
    AssessmentOptionsRes, HealthRes, RecommendReq, RecommendRes, ReferenceRes,
};
use api_shared::{auth, convert, HealthService};
use std::sync::Arc;
use tmr_core::RecommendationService;
use tonic::service::Interceptor;
use tonic::{Request, Response, Status};

/// Authentication interceptor for gRPC requests.
///
/// Every request must carry an `x-api-key` metadata entry equal to the key resolved at startup.
#[derive(Clone, Debug)]
pub struct ApiKeyInterceptor {
    expected_key: Option<Arc<str>>,
}

impl ApiKeyInterceptor {
    pub fn new(expected_key: Option<&str>) -> Self {
        Self {
            expected_key: expected_key.map(Arc::from),
        }
    }
}

impl Interceptor for ApiKeyInterceptor {
    fn call(&mut self, req: Request<()>) -> Result<Request<()>, Status> {
        let api_key = req
            .metadata()
            .get("x-api-key")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| Status::unauthenticated("Missing x-api-key header"))?;

        auth::validate_api_key(api_key, self.expected_key.as_deref())?;
        Ok(req)
    }
}

#[derive(Default, Clone)]
pub struct TmrService {
    recommendation_service: RecommendationService,
}

#[tonic::async_trait]
impl Tmr for TmrService {
    async fn health(&self, _req: Request<()>) -> Result<Response<HealthRes>, Status> {
        Ok(Response::new(HealthService::check_health()))
    }

    async fn recommend(
        &self,
        req: Request<RecommendReq>,
    ) -> Result<Response<RecommendRes>, Status> {
        let req = req.into_inner();
        let res = convert::recommend(&self.recommendation_service, &req);
        Ok(Response::new(res))
    }

    async fn reference(&self, _req: Request<()>) -> Result<Response<ReferenceRes>, Status> {
        Ok(Response::new(convert::reference_res()))
    }

    async fn assessment_options(
        &self,
        _req: Request<()>,
    ) -> Result<Response<AssessmentOptionsRes>, Status> {
        Ok(Response::new(convert::assessment_options_res()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_key(key: &str) -> Request<()> {
        let mut req = Request::new(());
        req.metadata_mut()
            .insert("x-api-key", key.parse().expect("ascii metadata"));
        req
    }

    #[test]
    fn interceptor_accepts_matching_key() {
        let mut interceptor = ApiKeyInterceptor::new(Some("secret"));
        assert!(interceptor.call(with_key("secret")).is_ok());
    }

    #[test]
    fn interceptor_rejects_missing_and_wrong_keys() {
        let mut interceptor = ApiKeyInterceptor::new(Some("secret"));

        let err = interceptor.call(Request::new(())).expect_err("missing key");
        assert_eq!(err.code(), tonic::Code::Unauthenticated);

        let err = interceptor.call(with_key("guess")).expect_err("wrong key");
        assert_eq!(err.code(), tonic::Code::Unauthenticated);
    }

    #[test]
    fn interceptor_without_configured_key_rejects() {
        let mut interceptor = ApiKeyInterceptor::new(None);
        let err = interceptor.call(with_key("anything")).expect_err("no key");
        assert_eq!(err.code(), tonic::Code::Internal);
    }

    #[tokio::test]
    async fn recommend_returns_plan_for_pip() {
        let svc = TmrService::default();
        let req = RecommendReq {
            amputation_level: "pip".into(),
            pain_status: "preventive".into(),
            prosthetic_needs: "no".into(),
            ..Default::default()
        };

        let res = svc
            .recommend(Request::new(req))
            .await
            .expect("recommend")
            .into_inner();
        assert!(res.complete);

        let rec = res.recommendation.expect("recommendation");
        assert_eq!(
            rec.surgical_approach,
            "Extended volar approach with carpal tunnel-type incision"
        );
        assert_eq!(rec.donor_nerves.len(), 2);
        assert_eq!(rec.target_motor_nerves.len(), 3);
        assert_eq!(rec.considerations.len(), 4);
        assert!(rec.preserve_functions.is_empty());
        assert!(rec.alternative_options.is_empty());
    }

    #[tokio::test]
    async fn recommend_without_level_is_incomplete() {
        let svc = TmrService::default();
        let req = RecommendReq {
            specific_amputation_type: "thumb".into(),
            comorbidities: vec!["diabetes".into()],
            ..Default::default()
        };

        let res = svc
            .recommend(Request::new(req))
            .await
            .expect("recommend")
            .into_inner();
        assert!(!res.complete);
        assert!(res.recommendation.is_none());
    }

    #[tokio::test]
    async fn reference_and_options_are_served() {
        let svc = TmrService::default();

        let reference = svc
            .reference(Request::new(()))
            .await
            .expect("reference")
            .into_inner();
        assert_eq!(reference.motor_entry_points.len(), 10);

        let options = svc
            .assessment_options(Request::new(()))
            .await
            .expect("options")
            .into_inner();
        assert_eq!(options.amputation_levels.len(), 5);

        let health = svc.health(Request::new(())).await.expect("health").into_inner();
        assert!(health.ok);
    }
}
