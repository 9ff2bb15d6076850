use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::cases_model::{Case, CaseStatus};

struct Seed {
    case_id: u32,
    title: &'static str,
    org_name: &'static str,
    story: &'static str,
    category: &'static str,
    city: &'static str,
    goal: Decimal,
    raised: Decimal,
}

const SEEDS: [Seed; 9] = [
    Seed {
        case_id: 301,
        title: "Cleveland Clinic – Heart Patient Support",
        org_name: "Cleveland Clinic (Demo)",
        story: "Help families cover parking, meals, and lodging while a loved one \
                undergoes cardiac surgery at a major heart center.",
        category: "Hospital",
        city: "Cleveland, OH",
        goal: dec!(5000.00),
        raised: dec!(1200.00),
    },
    Seed {
        case_id: 302,
        title: "St. Jude – Pediatric Cancer Travel",
        org_name: "St. Jude (Demo)",
        story: "Provide travel stipends for families flying in for pediatric \
                cancer treatment so money is never a reason to skip care.",
        category: "Hospital",
        city: "Memphis, TN",
        goal: dec!(6000.00),
        raised: dec!(3000.00),
    },
    Seed {
        case_id: 303,
        title: "Mayo Clinic – Transplant Housing",
        org_name: "Mayo Clinic (Demo)",
        story: "Support short-term housing for transplant patients and their \
                caregivers staying near the hospital during recovery.",
        category: "Hospital",
        city: "Rochester, MN",
        goal: dec!(7500.00),
        raised: dec!(4250.00),
    },
    Seed {
        case_id: 304,
        title: "Johns Hopkins – NICU Family Meals",
        org_name: "Johns Hopkins (Demo)",
        story: "Parents of babies in the NICU can spend 12+ hours bedside. \
                Fund hot meals so they don't have to choose between food and time with their child.",
        category: "Hospital",
        city: "Baltimore, MD",
        goal: dec!(3000.00),
        raised: dec!(800.00),
    },
    Seed {
        case_id: 305,
        title: "Mass General – Emergency Hardship",
        org_name: "Mass General (Demo)",
        story: "A small emergency grant can keep the lights on or cover a \
                co-pay after a sudden illness. You help social workers say 'yes'.",
        category: "Hospital",
        city: "Boston, MA",
        goal: dec!(4000.00),
        raised: dec!(1500.00),
    },
    Seed {
        case_id: 306,
        title: "Community Counseling Sessions",
        org_name: "Mindful City (Demo)",
        story: "Sponsor therapy sessions for people on waiting lists so they \
                can access mental health care before they're in crisis.",
        category: "Mental Health",
        city: "Cleveland, OH",
        goal: dec!(2500.00),
        raised: dec!(900.00),
    },
    Seed {
        case_id: 307,
        title: "Student Mental Health Hotline",
        org_name: "Campus Support (Demo)",
        story: "Fund trained counselors for a 24/7 text line so college students \
                can reach out anonymously any time they need support.",
        category: "Mental Health",
        city: "Nationwide",
        goal: dec!(3000.00),
        raised: dec!(1200.00),
    },
    Seed {
        case_id: 308,
        title: "Plant a Tree in Your City",
        org_name: "GreenEarth (Demo)",
        story: "A community lost its shade after storms. Every $5 plants a sapling. \
                Kids walk to school under the sun; your help grows a living canopy.",
        category: "Environment",
        city: "Multiple cities",
        goal: dec!(2000.00),
        raised: dec!(650.00),
    },
    Seed {
        case_id: 309,
        title: "School Lunch for a Month",
        org_name: "BrightPlates (Demo)",
        story: "Hungry students can't focus. $10 covers a child's lunches for a month, \
                a small lift that changes their whole day.",
        category: "Education",
        city: "Local districts",
        goal: dec!(2000.00),
        raised: dec!(800.00),
    },
];

/// The seed cases every fresh ledger starts with. All open.
pub fn default_cases() -> Vec<Case> {
    SEEDS
        .iter()
        .map(|seed| Case {
            case_id: seed.case_id,
            title: seed.title.to_string(),
            org_name: seed.org_name.to_string(),
            story: seed.story.to_string(),
            category: seed.category.to_string(),
            city: Some(seed.city.to_string()),
            goal: seed.goal,
            raised: seed.raised,
            status: CaseStatus::Open,
        })
        .collect()
}
