use super::{round1, round2, round_half_grade};
use crate::domain::contract::CardImage;
use crate::domain::grade::{
    GradePrediction, GradeResult, GradedValues, GradingService, MarketAnalysis, OverallGrade,
    Subgrades,
};
use rand::Rng;

pub const MODEL_VERSION: &str = "grader-mock-v1";

// Flat submission fee used by the profit estimate.
const GRADING_FEE: f64 = 25.0;

fn subgrades(rng: &mut impl Rng) -> Subgrades {
    let mut sub = || round_half_grade(rng.gen_range(8.0..=10.0));
    Subgrades {
        centering: sub(),
        corners: sub(),
        edges: sub(),
        surface: sub(),
    }
}

pub(crate) fn grade(rng: &mut impl Rng, image: &CardImage) -> GradeResult {
    let subgrades = subgrades(rng);
    let mean = subgrades.mean();

    let overall_grade = OverallGrade {
        psa: round_half_grade(mean + rng.gen_range(-0.5..=0.5)),
        bgs: round_half_grade(mean),
        sgc: round_half_grade(mean + rng.gen_range(-0.5..=0.5)),
    };

    let raw_value = round2(rng.gen_range(20.0..=250.0));
    let graded_values = GradedValues {
        psa10: round2(raw_value * rng.gen_range(4.0..=8.0)),
        psa9: round2(raw_value * rng.gen_range(2.0..=3.0)),
        psa8: round2(raw_value * rng.gen_range(1.2..=1.6)),
    };

    let recommended_service = if overall_grade.psa >= 9.5 {
        GradingService::Psa
    } else if overall_grade.bgs >= 9.0 {
        GradingService::Bgs
    } else {
        GradingService::Sgc
    };

    let profit_estimate =
        round2((graded_values.for_psa_grade(overall_grade.psa) - raw_value - GRADING_FEE).max(0.0));

    tracing::debug!(
        image_size = image.size,
        psa = overall_grade.psa,
        %recommended_service,
        "generated mock grade"
    );

    GradeResult {
        processing_time: format!("{:.1}s", rng.gen_range(1.2..=3.5)),
        confidence_score: round1(rng.gen_range(85.0..=99.0)),
        overall_grade,
        subgrades,
        market_analysis: MarketAnalysis {
            raw_value,
            graded_values,
            recommended_service,
            profit_estimate,
        },
    }
}

pub(crate) fn predict(rng: &mut impl Rng, image: &CardImage) -> GradePrediction {
    let subgrades = subgrades(rng);
    let predicted_grade = round_half_grade(subgrades.mean() + rng.gen_range(-0.5..=0.5));

    GradePrediction {
        predicted_grade,
        confidence: round1(rng.gen_range(80.0..=98.0)),
        subgrades,
        filename: image.filename.clone(),
        file_size: image.size,
        model_version: MODEL_VERSION.to_string(),
    }
}
