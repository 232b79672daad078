pub mod activity;
pub mod legal_form;
pub mod recommendation;
pub mod regimes;

pub use activity::{classify_activity, domiciliation_for, DomiciliationAdvice};
pub use legal_form::{recommend_legal_form, LegalFormRecommendation};
pub use recommendation::{
    build_recommendation, AdditionalService, FiscalAdvice, Recommendation,
    RecommendationOutcome, ServiceSuggestion, DEFAULT_REGIME_NOTICE,
};
pub use regimes::{
    recommend_social_regime, recommend_tax_regime, recommend_vat_regime, RegimeAdvice, VatAdvice,
};
