//! The fixed section catalog.
//!
//! Order here is page order. Placeholders are resolved by
//! [`render_template`](super::render_template).

/// Template for one section.
#[derive(Debug, Clone, Copy)]
pub struct SectionTemplate {
    /// Heading template.
    pub title: &'static str,
    /// Lead paragraph template.
    pub summary: &'static str,
    /// `(heading, body)` templates.
    pub perspectives: [(&'static str, &'static str); 2],
    /// `(heading, detail)` templates.
    pub plays: [(&'static str, &'static str); 3],
}

/// Closing sentences appended to summaries, bodies and details, rotating by
/// position so neighbouring paragraphs do not end identically.
pub const CLOSING_CLAUSES: [&str; 3] = [
    "Built for ${audience}.",
    "Anchor it in ${keyword1}, ${keyword2}, and ${keyword3}.",
    "Pressure-test it against ${useCase1}, ${useCase2}, and ${useCase3}.",
];

/// Every section of a playbook page, in order.
pub const SECTIONS: [SectionTemplate; 16] = [
    // intro
    SectionTemplate {
        title: "Why ${topic} matters now",
        summary: "${topic} gives ${audience} a clear path from scattered tactics to ${differentiator}.",
        perspectives: [
            (
                "The shift in ${pillar}",
                "Buyers expect relevance at every touchpoint, and ${keyword1} is where that expectation is set or broken.",
            ),
            (
                "What good looks like",
                "Mature teams treat ${keyword2} as a system with owners, inputs and feedback loops rather than a campaign calendar.",
            ),
        ],
        plays: [
            (
                "Name the outcome",
                "Write down the single pipeline metric this playbook should move over ${timeframe}.",
            ),
            (
                "Audit the starting point",
                "List every live ${keyword1} program and the last time someone reviewed its results.",
            ),
            (
                "Pick an owner",
                "Assign one accountable lead for ${pillar} before any tooling decisions are made.",
            ),
        ],
    },
    // SERP intent
    SectionTemplate {
        title: "What searchers want from ${keyword1}",
        summary: "People searching for ${keyword1} and ${keyword2} are usually mid-evaluation and want proof, not definitions.",
        perspectives: [
            (
                "Informational intent",
                "Early queries ask how ${keyword1} works; answer them with frameworks and worked examples.",
            ),
            (
                "Commercial intent",
                "Comparison queries signal budget; meet them with benchmarks, pricing context and ${proofPoint}.",
            ),
        ],
        plays: [
            (
                "Map the query set",
                "Group the top fifty ${keyword1} queries by intent and note which ones you already rank for.",
            ),
            (
                "Match format to intent",
                "Use checklists for how-to queries and comparison tables for vendor queries.",
            ),
            (
                "Close the gaps",
                "Brief one new page per quarter for the highest-value intent you do not yet serve.",
            ),
        ],
    },
    // pain points
    SectionTemplate {
        title: "Where ${pillar} programs stall",
        summary: "Most ${pillar} efforts stall on ownership and measurement long before they stall on ideas.",
        perspectives: [
            (
                "Fragmented ownership",
                "When ${keyword1} and ${keyword2} sit with different teams, nobody owns the handoff between them.",
            ),
            (
                "Vanity reporting",
                "Activity metrics look healthy while the pipeline contribution of ${keyword3} stays invisible.",
            ),
        ],
        plays: [
            (
                "List the blockers",
                "Interview three people who run ${keyword1} day to day and write down what slows them most.",
            ),
            (
                "Rank by cost",
                "Estimate the hours or revenue each blocker costs per month and sort the list.",
            ),
            (
                "Remove one blocker",
                "Fix the top item before adding any new program.",
            ),
        ],
    },
    // diagnostic framework
    SectionTemplate {
        title: "A diagnostic framework for ${keyword2}",
        summary: "Score ${keyword2} on reach, relevance, conversion and retention to see where effort pays back fastest.",
        perspectives: [
            (
                "Leading indicators",
                "Engagement and reply rates tell you within weeks whether ${keyword2} is landing.",
            ),
            (
                "Lagging indicators",
                "Pipeline and revenue confirm the trend, but only over ${timeframe} or longer.",
            ),
        ],
        plays: [
            (
                "Score each stage",
                "Rate reach, relevance, conversion and retention from one to five with evidence for each score.",
            ),
            (
                "Find the constraint",
                "The lowest score is the constraint; every other improvement waits on it.",
            ),
            (
                "Re-score monthly",
                "Repeat the diagnostic every month and keep the history in one shared sheet.",
            ),
        ],
    },
    // strategy
    SectionTemplate {
        title: "Core strategy for ${keyword1}",
        summary: "The strategy is simple to state: build ${differentiator}, then compound it.",
        perspectives: [
            (
                "Focus",
                "Choose the one segment where ${keyword1} already works and go deeper there before expanding.",
            ),
            (
                "Sequencing",
                "Fix capture and routing first, then personalization, then scale through ${keyword2}.",
            ),
        ],
        plays: [
            (
                "Write the strategy on one page",
                "State the segment, the promise, the channels and the metric for ${topic}.",
            ),
            (
                "Set guardrails",
                "Agree in advance what you will not do during ${timeframe}.",
            ),
            (
                "Share it widely",
                "Walk sales, success and finance through the one-pager and collect objections.",
            ),
        ],
    },
    // channels
    SectionTemplate {
        title: "Channel mix for ${keyword2}",
        summary: "No single channel carries ${pillar}; the mix should reflect where ${audience} already spend attention.",
        perspectives: [
            (
                "Owned channels",
                "Email, site and community compound over time and make ${keyword2} cheaper every quarter.",
            ),
            (
                "Paid and partner channels",
                "Paid reach buys speed; use it to test messages before committing owned resources.",
            ),
        ],
        plays: [
            (
                "Inventory channels",
                "List every channel touching ${keyword2} with its cost and attributed pipeline.",
            ),
            (
                "Cut the tail",
                "Pause the bottom fifth of channels by efficiency and reallocate the budget.",
            ),
            (
                "Double down",
                "Give the top channel a dedicated owner and a stretch target.",
            ),
        ],
    },
    // experimentation
    SectionTemplate {
        title: "Experiments to run over ${timeframe}",
        summary: "A steady experiment cadence turns ${keyword3} from opinion into evidence.",
        perspectives: [
            (
                "Hypothesis first",
                "Every test states what will change, by how much, and why, before anything ships.",
            ),
            (
                "Small and fast",
                "Prefer ten small tests on ${keyword1} to one large redesign.",
            ),
        ],
        plays: [
            (
                "Build a backlog",
                "Collect twenty test ideas and score each on impact, confidence and effort.",
            ),
            (
                "Ship weekly",
                "Launch at least one experiment per week and log the result, win or lose.",
            ),
            (
                "Codify winners",
                "Roll winning variants into the default ${keyword2} templates within a week.",
            ),
        ],
    },
    // measurement
    SectionTemplate {
        title: "Measuring ${keyword3}",
        summary: "Measurement should answer one question for leadership: is ${keyword3} creating pipeline we would not otherwise have?",
        perspectives: [
            (
                "Attribution",
                "Use a simple, consistent model and explain its blind spots rather than chasing precision.",
            ),
            (
                "Incrementality",
                "Holdout groups are the most honest way to show what ${keyword3} actually adds.",
            ),
        ],
        plays: [
            (
                "Define the metric tree",
                "Connect every ${keyword3} metric to the revenue number it ultimately feeds.",
            ),
            (
                "Run a holdout",
                "Withhold one program from a random slice of the audience for a full cycle.",
            ),
            (
                "Publish a scorecard",
                "Send a one-page scorecard every month with the same layout every time.",
            ),
        ],
    },
    // tooling
    SectionTemplate {
        title: "Tooling and stack for ${pillar}",
        summary: "Tools should follow the process; buy only what removes a bottleneck you have already felt.",
        perspectives: [
            (
                "Core platform",
                "One system of record for contacts and events keeps ${keyword1} and ${keyword2} consistent.",
            ),
            (
                "Point solutions",
                "Add specialized tools only when the core platform cannot do the job and the gap is measurable.",
            ),
        ],
        plays: [
            (
                "Map the stack",
                "Draw every tool and data flow involved in ${pillar} on one diagram.",
            ),
            (
                "Retire overlap",
                "Remove any tool whose job is already done elsewhere.",
            ),
            (
                "Document integrations",
                "Write down who owns each integration and how failures are detected.",
            ),
        ],
    },
    // governance
    SectionTemplate {
        title: "Governance and ownership",
        summary: "Clear ownership keeps ${topic} running after the launch energy fades.",
        perspectives: [
            (
                "Decision rights",
                "Say who approves new ${keyword1} programs, who can pause them, and who reports on them.",
            ),
            (
                "Quality standards",
                "Shared templates and review checklists keep output consistent as more people contribute.",
            ),
        ],
        plays: [
            (
                "Write a RACI",
                "List every recurring ${pillar} activity with a responsible and an accountable person.",
            ),
            (
                "Set review gates",
                "Require a peer review before anything reaches more than a thousand recipients.",
            ),
            (
                "Audit quarterly",
                "Check that live programs still have owners and still meet the standards.",
            ),
        ],
    },
    // optimization
    SectionTemplate {
        title: "Optimizing ${keyword1} over time",
        summary: "Optimization is where ${keyword1} compounds: small, steady gains across every stage of the funnel.",
        perspectives: [
            (
                "Conversion",
                "Most gains come from removing friction in forms, handoffs and follow-up timing.",
            ),
            (
                "Relevance",
                "Segmenting by intent and lifecycle stage makes ${keyword2} feel personal without bespoke work.",
            ),
        ],
        plays: [
            (
                "Find the leak",
                "Locate the funnel stage with the steepest drop-off and study it first.",
            ),
            (
                "Refresh creative",
                "Rotate messaging every six weeks to counter fatigue in ${keyword1}.",
            ),
            (
                "Tune timing",
                "Test send and follow-up timing against the engagement history of each segment.",
            ),
        ],
    },
    // financial modeling
    SectionTemplate {
        title: "Modeling the return on ${keyword2}",
        summary: "A simple financial model turns ${heroStat} from a slogan into a budget conversation.",
        perspectives: [
            (
                "Unit economics",
                "Start from cost per qualified opportunity and expected win rate, not from impressions.",
            ),
            (
                "Payback",
                "Show when ${keyword2} investment pays back and how sensitive that date is to win rate.",
            ),
        ],
        plays: [
            (
                "Build the base case",
                "Model volume, conversion and deal size for ${timeframe} using last quarter as the baseline.",
            ),
            (
                "Add scenarios",
                "Show a conservative and an ambitious case next to the base case.",
            ),
            (
                "Review with finance",
                "Walk finance through the assumptions and adopt their corrections.",
            ),
        ],
    },
    // rituals
    SectionTemplate {
        title: "Team rituals that keep ${pillar} on track",
        summary: "Lightweight rituals keep ${topic} visible without adding meeting load.",
        perspectives: [
            (
                "Weekly pulse",
                "A fifteen-minute review of leading indicators catches problems while they are cheap.",
            ),
            (
                "Monthly retro",
                "A monthly retro on ${keyword3} turns results into next month's experiments.",
            ),
        ],
        plays: [
            (
                "Start a weekly standup",
                "Review the scorecard, the experiment log and blockers in fifteen minutes.",
            ),
            (
                "Hold a monthly retro",
                "Ask what worked, what did not, and what to try next for ${keyword1}.",
            ),
            (
                "Share wins",
                "Post one customer-facing win in a public channel every week.",
            ),
        ],
    },
    // case study
    SectionTemplate {
        title: "Case study: ${heroStat}",
        summary: "A mid-market team applied this playbook and found that ${proofPoint}.",
        perspectives: [
            (
                "Before",
                "Programs for ${keyword1} ran on intuition, reporting took days, and nobody trusted attribution.",
            ),
            (
                "After",
                "With one owner, one scorecard and a weekly experiment cadence, ${keyword2} became predictable.",
            ),
        ],
        plays: [
            (
                "Start with the diagnostic",
                "They scored every stage and found conversion was the constraint.",
            ),
            (
                "Fix one thing at a time",
                "They fixed routing first, then messaging, then timing.",
            ),
            (
                "Report relentlessly",
                "A monthly scorecard kept leadership invested through ${timeframe}.",
            ),
        ],
    },
    // FAQ
    SectionTemplate {
        title: "${topic} FAQ",
        summary: "Answers to the questions teams ask most often when adopting ${topic}.",
        perspectives: [
            (
                "How long until results?",
                "Leading indicators move within weeks; pipeline impact from ${keyword1} usually shows within ${timeframe}.",
            ),
            (
                "Do we need new tools?",
                "Rarely at first. Most teams get further by fixing process and ownership around ${keyword2}.",
            ),
        ],
        plays: [
            (
                "What if we are a small team?",
                "Run the diagnostic and one experiment per fortnight; the cadence matters more than volume.",
            ),
            (
                "How do we get buy-in?",
                "Lead with the financial model and a single metric leadership already cares about.",
            ),
            (
                "Where do we start?",
                "Start with the constraint the diagnostic surfaces, not with the most exciting idea.",
            ),
        ],
    },
    // roadmap
    SectionTemplate {
        title: "Roadmap for ${timeframe}",
        summary: "A phased plan for rolling out ${topic} without stalling current programs.",
        perspectives: [
            (
                "Days 1-30",
                "Diagnose, assign owners and fix the biggest blocker in ${keyword1}.",
            ),
            (
                "Days 31-90",
                "Run the experiment cadence, publish the scorecard and scale what works in ${keyword2}.",
            ),
        ],
        plays: [
            (
                "Month one",
                "Complete the diagnostic, the one-page strategy and the RACI.",
            ),
            (
                "Month two",
                "Ship weekly experiments and launch the scorecard for ${keyword3}.",
            ),
            (
                "Month three",
                "Review results with finance and set targets for the next quarter.",
            ),
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_size() {
        assert_eq!(SECTIONS.len(), 16);
    }

    #[test]
    fn test_titles_distinct() {
        let mut titles: Vec<_> = SECTIONS.iter().map(|s| s.title).collect();
        titles.sort_unstable();
        titles.dedup();
        assert_eq!(titles.len(), SECTIONS.len());
    }
}
