mod insight;
mod network;
mod tutor;

pub use insight::{ColorCodes, NetworkInsightQuery, Severity, StructuredInsight, TimelinePoint, VisualData};
pub use network::{
    DashboardData, GenericInsights, InsightsRequest, NetworkSample, PerformanceMetrics,
    PerformanceReport, SchoolUptime, WeeklyProgress,
};
pub use tutor::{AnswerSubmission, EvaluationFeedback, EvaluationResult, TutorQuestion, TutorReply};
