//! The fixed six-week curriculum template.
//!
//! This is the default `modules` document: created once, then mutated in
//! place for the life of the application. Modules are never added or removed
//! at runtime.

use super::{StudyModule, Topic};

fn module(id: u32, title: &str, description: &str, topics: &[(&str, &str)]) -> StudyModule {
    StudyModule {
        id,
        title: title.to_string(),
        description: description.to_string(),
        topics: topics
            .iter()
            .map(|(topic_id, topic_title)| Topic::new(*topic_id, *topic_title))
            .collect(),
    }
}

/// Builds the default study plan: six weekly modules of five topics each.
pub fn default_curriculum() -> Vec<StudyModule> {
    vec![
        module(
            1,
            "Week 1: Algebra Foundations",
            "Mastering the basics of functions and equations.",
            &[
                ("w1-t1", "Real Numbers & Radicals"),
                ("w1-t2", "Polynomials & Factoring"),
                ("w1-t3", "Linear Equations & Inequalities"),
                ("w1-t4", "Quadratic Functions"),
                ("w1-t5", "Systems of Equations"),
            ],
        ),
        module(
            2,
            "Week 2: Trigonometry",
            "Angles, circles, and waves.",
            &[
                ("w2-t1", "Unit Circle & Radians"),
                ("w2-t2", "Trig Functions & Graphs"),
                ("w2-t3", "Trig Identities"),
                ("w2-t4", "Inverse Trig Functions"),
                ("w2-t5", "Law of Sines & Cosines"),
            ],
        ),
        module(
            3,
            "Week 3: Limits & Derivatives",
            "Introduction to Calculus I.",
            &[
                ("w3-t1", "Limits & Continuity"),
                ("w3-t2", "Definition of Derivative"),
                ("w3-t3", "Power, Product, Quotient Rules"),
                ("w3-t4", "Chain Rule"),
                ("w3-t5", "Implicit Differentiation"),
            ],
        ),
        module(
            4,
            "Week 4: Applications of Derivatives",
            "Using calculus to solve problems.",
            &[
                ("w4-t1", "Related Rates"),
                ("w4-t2", "Critical Points & Extrema"),
                ("w4-t3", "Concavity & Curve Sketching"),
                ("w4-t4", "Optimization Problems"),
                ("w4-t5", "Mean Value Theorem"),
            ],
        ),
        module(
            5,
            "Week 5: Integrals",
            "Area under the curve and accumulation.",
            &[
                ("w5-t1", "Riemann Sums"),
                ("w5-t2", "Definite Integrals"),
                ("w5-t3", "Fundamental Theorem of Calculus"),
                ("w5-t4", "Integration by Substitution"),
                ("w5-t5", "Area Between Curves"),
            ],
        ),
        module(
            6,
            "Week 6: Statistics & Probability",
            "Data analysis and chance.",
            &[
                ("w6-t1", "Descriptive Statistics"),
                ("w6-t2", "Probability Rules"),
                ("w6-t3", "Random Variables"),
                ("w6-t4", "Normal Distribution"),
                ("w6-t5", "Final Review Mock Exam"),
            ],
        ),
    ]
}
