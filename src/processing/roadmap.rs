//! Remediation roadmap for skills a candidate is missing

use serde::{Deserialize, Serialize};
use strsim::jaro_winkler;

/// Minimum Jaro-Winkler similarity for a missing skill to reuse a known plan.
const SIMILARITY_THRESHOLD: f64 = 0.9;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Priority {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoadmapItem {
    pub skill: String,
    pub priority: Priority,
    pub estimated_weeks: u32,
    pub steps: Vec<String>,
}

struct LearningPlan {
    skill: &'static str,
    weeks: u32,
    steps: &'static [&'static str],
}

const LEARNING_PLANS: &[LearningPlan] = &[
    LearningPlan {
        skill: "python",
        weeks: 4,
        steps: &[
            "Work through the official Python tutorial",
            "Write small scripts with the standard library (files, json, csv)",
            "Build and publish a command-line tool with tests",
        ],
    },
    LearningPlan {
        skill: "java",
        weeks: 6,
        steps: &[
            "Learn core syntax, collections and generics",
            "Build a REST service with a mainstream framework",
            "Add unit tests and a build pipeline",
        ],
    },
    LearningPlan {
        skill: "javascript",
        weeks: 4,
        steps: &[
            "Learn modern syntax, closures and promises",
            "Manipulate the DOM and call an HTTP API",
            "Ship a small interactive web page",
        ],
    },
    LearningPlan {
        skill: "react",
        weeks: 4,
        steps: &[
            "Learn components, props and state",
            "Use hooks for effects and data fetching",
            "Build and deploy a multi-page app with routing",
        ],
    },
    LearningPlan {
        skill: "node.js",
        weeks: 4,
        steps: &[
            "Learn the event loop and async patterns",
            "Build an HTTP API with persistence",
            "Add authentication and integration tests",
        ],
    },
    LearningPlan {
        skill: "sql",
        weeks: 3,
        steps: &[
            "Practice SELECT, JOIN and GROUP BY on a sample dataset",
            "Design a normalized schema with indexes",
            "Solve a set of interview-style query problems",
        ],
    },
    LearningPlan {
        skill: "docker",
        weeks: 2,
        steps: &[
            "Containerize an existing project with a Dockerfile",
            "Compose a multi-service setup with a database",
            "Publish an image from a CI pipeline",
        ],
    },
    LearningPlan {
        skill: "kubernetes",
        weeks: 5,
        steps: &[
            "Run a local cluster and deploy a container",
            "Use services, config maps and rolling updates",
            "Package a deployment with Helm",
        ],
    },
    LearningPlan {
        skill: "aws",
        weeks: 5,
        steps: &[
            "Learn IAM, EC2 and S3 fundamentals",
            "Deploy a web service behind a load balancer",
            "Prepare for an associate-level certification",
        ],
    },
    LearningPlan {
        skill: "git",
        weeks: 1,
        steps: &[
            "Learn branching, merging and rebasing",
            "Contribute a pull request to an open-source project",
        ],
    },
    LearningPlan {
        skill: "machine learning",
        weeks: 8,
        steps: &[
            "Review linear algebra, probability and statistics",
            "Train classical models with a standard ML library",
            "Complete an end-to-end project with evaluation and a write-up",
        ],
    },
    LearningPlan {
        skill: "data structures",
        weeks: 6,
        steps: &[
            "Implement arrays, linked lists, trees and hash maps from scratch",
            "Solve graded problems on a competitive programming site",
            "Practice timed mock interviews",
        ],
    },
    LearningPlan {
        skill: "linux",
        weeks: 2,
        steps: &[
            "Get comfortable with the shell, permissions and processes",
            "Automate a workflow with a shell script",
        ],
    },
];

const GENERIC_WEEKS: u32 = 3;

/// One roadmap item per missing skill, in the order the skills are given.
pub fn build_roadmap(missing_skills: &[String]) -> Vec<RoadmapItem> {
    missing_skills
        .iter()
        .enumerate()
        .map(|(position, skill)| {
            let priority = match position {
                0 | 1 => Priority::High,
                2 | 3 => Priority::Medium,
                _ => Priority::Low,
            };

            match find_plan(skill) {
                Some(plan) => RoadmapItem {
                    skill: skill.clone(),
                    priority,
                    estimated_weeks: plan.weeks,
                    steps: plan.steps.iter().map(|s| s.to_string()).collect(),
                },
                None => RoadmapItem {
                    skill: skill.clone(),
                    priority,
                    estimated_weeks: GENERIC_WEEKS,
                    steps: generic_steps(skill),
                },
            }
        })
        .collect()
}

fn find_plan(skill: &str) -> Option<&'static LearningPlan> {
    let wanted = skill.trim().to_lowercase();

    if let Some(plan) = LEARNING_PLANS.iter().find(|plan| plan.skill == wanted) {
        return Some(plan);
    }

    LEARNING_PLANS
        .iter()
        .map(|plan| (plan, jaro_winkler(plan.skill, &wanted)))
        .filter(|(_, similarity)| *similarity >= SIMILARITY_THRESHOLD)
        .max_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(plan, _)| plan)
}

fn generic_steps(skill: &str) -> Vec<String> {
    vec![
        format!("Study the fundamentals of {} from its official documentation", skill),
        format!("Build a small project that uses {} end to end", skill),
        format!("Add the {} project to the resume with measurable outcomes", skill),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skills(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_known_skill_uses_its_plan() {
        let roadmap = build_roadmap(&skills(&["Docker"]));
        assert_eq!(roadmap.len(), 1);
        assert_eq!(roadmap[0].skill, "Docker");
        assert_eq!(roadmap[0].estimated_weeks, 2);
        assert_eq!(roadmap[0].priority, Priority::High);
    }

    #[test]
    fn test_close_spelling_reuses_plan() {
        let roadmap = build_roadmap(&skills(&["Kubernete"]));
        assert_eq!(roadmap[0].estimated_weeks, 5);
    }

    #[test]
    fn test_unknown_skill_gets_generic_plan() {
        let roadmap = build_roadmap(&skills(&["Elixir"]));
        assert_eq!(roadmap[0].estimated_weeks, GENERIC_WEEKS);
        assert!(roadmap[0].steps.iter().all(|step| step.contains("Elixir")));
    }

    #[test]
    fn test_priorities_follow_order() {
        let roadmap = build_roadmap(&skills(&["a1", "b2", "c3", "d4", "e5"]));
        let priorities: Vec<Priority> = roadmap.iter().map(|item| item.priority).collect();
        assert_eq!(
            priorities,
            vec![Priority::High, Priority::High, Priority::Medium, Priority::Medium, Priority::Low]
        );
    }

    #[test]
    fn test_no_missing_skills_no_roadmap() {
        assert!(build_roadmap(&[]).is_empty());
    }
}
