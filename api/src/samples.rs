use serde::Serialize;

/// Starter questions shown before the chat begins. Picking one only fills
/// the input field.
#[derive(Debug, Clone, Serialize)]
pub struct SampleQuestion {
    pub title: &'static str,
    pub question: &'static str,
}

pub const SAMPLE_QUESTIONS: [SampleQuestion; 4] = [
    SampleQuestion {
        title: "Course Overview",
        question: "What is the main objective of this course?",
    },
    SampleQuestion {
        title: "Assessment Breakdown",
        question: "How is the final grade calculated? List the assessments and their weights.",
    },
    SampleQuestion {
        title: "Weekly Topics",
        question: "What topics will be covered in week 5?",
    },
    SampleQuestion {
        title: "Contact Information",
        question: "How can I contact the course coordinator?",
    },
];
