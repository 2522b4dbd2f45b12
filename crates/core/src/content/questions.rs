//! Level-specific practice questions.
//!
//! Only a subset of (topic, level) pairs carry curated questions; callers fall
//! back to a generated placeholder for the rest.

use crate::model::{AnswerChoice, Level, Topic};

/// A curated multiple-choice question from the built-in bank.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BankQuestion {
    pub question: &'static str,
    pub options: [&'static str; 4],
    pub answer: AnswerChoice,
    pub explanation: &'static str,
}

/// Returns the curated questions for `topic` at `level`, in bank order.
///
/// An empty slice means the bank has nothing for that pair.
#[must_use]
pub fn questions_for(topic: Topic, level: Level) -> &'static [BankQuestion] {
    match (topic, level) {
        (Topic::Ethics, Level::One) => ETHICS_LEVEL_1,
        (Topic::QuantitativeMethods, Level::One) => QUANTITATIVE_METHODS_LEVEL_1,
        (Topic::Economics, Level::One) => ECONOMICS_LEVEL_1,
        (Topic::FinancialReportingAndAnalysis, Level::One) => {
            FINANCIAL_REPORTING_AND_ANALYSIS_LEVEL_1
        }
        (Topic::CorporateFinance, Level::One) => CORPORATE_FINANCE_LEVEL_1,
        _ => &[],
    }
}

const ETHICS_LEVEL_1: &[BankQuestion] = &[
    BankQuestion {
        question: "Which of the following best describes a primary requirement of the CFA Institute Code of Ethics?",
        options: [
            "Members and candidates must place their own interests above those of their clients",
            "Members and candidates must place the integrity of the investment profession and the interests of clients above their own personal interests",
            "Members and candidates must prioritize their employer's interests above all others",
            "Members and candidates must follow their country's laws regardless of CFA Institute standards",
        ],
        answer: AnswerChoice::B,
        explanation: "The CFA Institute Code of Ethics requires members and candidates to place the integrity of the investment profession and the interests of clients above their own personal interests.",
    },
    BankQuestion {
        question: "According to the CFA Institute Standards of Professional Conduct, which of the following is a violation of the Professionalism standard?",
        options: [
            "Making investment recommendations based on thorough research",
            "Accepting compensation from a client in addition to salary from an employer without written consent",
            "Disclosing conflicts of interest to clients",
            "Maintaining competence through continuing education",
        ],
        answer: AnswerChoice::B,
        explanation: "Accepting additional compensation without written consent from both parties is a violation of Standard IV(A) - Loyalty to Employer.",
    },
    BankQuestion {
        question: "A portfolio manager recommends a high-risk investment to a client without fully disclosing the potential conflicts of interest. This action most likely violates which standards?",
        options: [
            "Duties to Employers and Integrity of Capital Markets",
            "Duties to Clients and Professionalism",
            "Conflicts of Interest and Duties to Clients",
            "Investment Analysis and Record Retention",
        ],
        answer: AnswerChoice::C,
        explanation: "This violates Standard VI(A) - Disclosure of Conflicts and Standard III(C) - Suitability.",
    },
    BankQuestion {
        question: "Which of the following is NOT one of the six major sections of the CFA Institute Standards of Professional Conduct?",
        options: [
            "Professionalism",
            "Integrity of Capital Markets",
            "Duties to Colleagues",
            "Investment Recommendations and Actions",
        ],
        answer: AnswerChoice::C,
        explanation: "The six major sections are: Professionalism, Integrity of Capital Markets, Duties to Clients, Duties to Employers, Investment Analysis, Recommendations and Actions, and Conflicts of Interest. There is no 'Duties to Colleagues' section.",
    },
    BankQuestion {
        question: "According to the CFA Institute Code of Ethics, members and candidates must act with:",
        options: [
            "Integrity, competence, dignity, and in an ethical manner",
            "Only the highest levels of mathematical skill",
            "Primary concern for their own financial gain",
            "Complete independence from market forces",
        ],
        answer: AnswerChoice::A,
        explanation: "The Code of Ethics states that members and candidates must act with integrity, competence, dignity, and in an ethical manner.",
    },
];

const QUANTITATIVE_METHODS_LEVEL_1: &[BankQuestion] = &[
    BankQuestion {
        question: "What is the present value of $1,000 to be received in 3 years if the annual discount rate is 5%?",
        options: [
            "$863.84",
            "$850.00",
            "$1,157.63",
            "$1,000.00",
        ],
        answer: AnswerChoice::A,
        explanation: "PV = FV/(1+r)^n = $1,000/(1.05)^3 = $1,000/1.157625 = $863.84",
    },
    BankQuestion {
        question: "Which of the following is a measure of central tendency?",
        options: [
            "Range",
            "Standard deviation",
            "Median",
            "Variance",
        ],
        answer: AnswerChoice::C,
        explanation: "The median is a measure of central tendency, along with the mean and mode. Range, standard deviation, and variance are measures of dispersion.",
    },
    BankQuestion {
        question: "In a normal distribution, approximately what percentage of observations fall within one standard deviation of the mean?",
        options: [
            "68%",
            "90%",
            "95%",
            "99%",
        ],
        answer: AnswerChoice::A,
        explanation: "In a normal distribution, approximately 68% of observations fall within one standard deviation of the mean, 95% within two standard deviations, and 99% within three standard deviations.",
    },
    BankQuestion {
        question: "Which of the following best describes the relationship between covariance and correlation?",
        options: [
            "Correlation is the standardized form of covariance",
            "Covariance is the standardized form of correlation",
            "They are identical measures",
            "They measure opposite relationships",
        ],
        answer: AnswerChoice::A,
        explanation: "Correlation is the standardized form of covariance, calculated as covariance divided by the product of the standard deviations of the two variables.",
    },
    BankQuestion {
        question: "A Type I error in hypothesis testing occurs when:",
        options: [
            "We fail to reject a true null hypothesis",
            "We reject a true null hypothesis",
            "We accept a false null hypothesis",
            "We correctly reject a false null hypothesis",
        ],
        answer: AnswerChoice::B,
        explanation: "A Type I error occurs when we incorrectly reject a true null hypothesis (false positive).",
    },
];

const ECONOMICS_LEVEL_1: &[BankQuestion] = &[
    BankQuestion {
        question: "If the central bank increases the money supply, what is the most likely short-term effect on interest rates and aggregate demand?",
        options: [
            "Interest rates increase and aggregate demand decreases",
            "Interest rates decrease and aggregate demand increases",
            "Both interest rates and aggregate demand decrease",
            "Both interest rates and aggregate demand increase",
        ],
        answer: AnswerChoice::B,
        explanation: "Increasing money supply typically lowers interest rates, which stimulates borrowing and spending, increasing aggregate demand.",
    },
    BankQuestion {
        question: "Which of the following best describes the law of demand?",
        options: [
            "Quantity demanded increases as price increases",
            "Quantity demanded decreases as price increases",
            "Quantity demanded remains constant regardless of price",
            "Quantity demanded is inversely related to supply",
        ],
        answer: AnswerChoice::B,
        explanation: "The law of demand states that there is an inverse relationship between price and quantity demanded, all else equal.",
    },
    BankQuestion {
        question: "In which phase of the business cycle would we expect to see rising employment and increasing GDP?",
        options: [
            "Trough",
            "Contraction",
            "Peak",
            "Expansion",
        ],
        answer: AnswerChoice::D,
        explanation: "During expansion, economic activity increases, leading to rising employment and GDP growth.",
    },
    BankQuestion {
        question: "Which of the following is most likely to cause a leftward shift in the aggregate demand curve?",
        options: [
            "Decrease in taxes",
            "Increase in consumer confidence",
            "Decrease in government spending",
            "Reduction in interest rates",
        ],
        answer: AnswerChoice::C,
        explanation: "A decrease in government spending reduces aggregate demand, shifting the curve to the left.",
    },
    BankQuestion {
        question: "Which type of unemployment is associated with economic downturns?",
        options: [
            "Frictional unemployment",
            "Structural unemployment",
            "Cyclical unemployment",
            "Seasonal unemployment",
        ],
        answer: AnswerChoice::C,
        explanation: "Cyclical unemployment occurs during economic recessions and downturns when demand for goods and services falls.",
    },
];

const FINANCIAL_REPORTING_AND_ANALYSIS_LEVEL_1: &[BankQuestion] = &[
    BankQuestion {
        question: "Which of the following financial statements reports a company's financial position at a specific point in time?",
        options: [
            "Income Statement",
            "Balance Sheet",
            "Cash Flow Statement",
            "Statement of Owners' Equity",
        ],
        answer: AnswerChoice::B,
        explanation: "The Balance Sheet reports a company's assets, liabilities, and equity at a specific point in time, while other statements report activities over a period.",
    },
    BankQuestion {
        question: "Which of the following ratios measures a company's ability to meet short-term obligations?",
        options: [
            "Debt-to-Equity Ratio",
            "Return on Assets",
            "Current Ratio",
            "Asset Turnover Ratio",
        ],
        answer: AnswerChoice::C,
        explanation: "The Current Ratio (Current Assets / Current Liabilities) measures short-term liquidity and the ability to meet near-term obligations.",
    },
    BankQuestion {
        question: "Under U.S. GAAP, which inventory valuation method results in the lowest taxable income during periods of rising prices?",
        options: [
            "FIFO (First-In, First-Out)",
            "LIFO (Last-In, First-Out)",
            "Weighted Average Cost",
            "Specific Identification",
        ],
        answer: AnswerChoice::B,
        explanation: "LIFO assigns the cost of the most recently purchased inventory to COGS, resulting in higher COGS and lower taxable income during inflation.",
    },
    BankQuestion {
        question: "Which of the following is classified as an operating activity in the cash flow statement?",
        options: [
            "Purchase of equipment",
            "Payment of dividends",
            "Receipt of dividends from investments",
            "Issuance of common stock",
        ],
        answer: AnswerChoice::C,
        explanation: "Receipt of dividends is considered an operating activity as it relates to the core business operations.",
    },
    BankQuestion {
        question: "Which of the following is true regarding the accounting equation?",
        options: [
            "Assets = Liabilities - Equity",
            "Assets = Equity - Liabilities",
            "Assets = Liabilities + Equity",
            "Liabilities = Assets + Equity",
        ],
        answer: AnswerChoice::C,
        explanation: "The fundamental accounting equation is Assets = Liabilities + Equity, representing the sources of funds for a company's assets.",
    },
];

const CORPORATE_FINANCE_LEVEL_1: &[BankQuestion] = &[
    BankQuestion {
        question: "Which of the following ratios measures a company's ability to meet short-term obligations?",
        options: [
            "Debt-to-Equity Ratio",
            "Return on Assets",
            "Current Ratio",
            "Asset Turnover Ratio",
        ],
        answer: AnswerChoice::C,
        explanation: "The Current Ratio (Current Assets / Current Liabilities) measures short-term liquidity and the ability to meet near-term obligations.",
    },
    BankQuestion {
        question: "Corporate Finance covers capital budgeting, cost of capital, and working capital management. Understanding which of the following is essential for evaluating investment projects?",
        options: [
            "NPV, IRR, and payback period",
            "Beta coefficient and market risk premium",
            "Dividend payout ratio and retention rate",
            "Price-to-earnings ratio and market-to-book ratio",
        ],
        answer: AnswerChoice::A,
        explanation: "Understanding NPV (Net Present Value), IRR (Internal Rate of Return), and payback period is essential for evaluating investment projects in corporate finance.",
    },
    BankQuestion {
        question: "What does the weighted average cost of capital (WACC) represent?",
        options: [
            "The cost of debt financing only",
            "The cost of equity financing only",
            "The average rate of return a company is expected to pay to its security holders",
            "The minimum return required by preferred shareholders",
        ],
        answer: AnswerChoice::C,
        explanation: "WACC represents the average rate of return a company is expected to pay to its security holders, weighted by the proportion of each financing source.",
    },
    BankQuestion {
        question: "Which of the following best describes the optimal capital structure?",
        options: [
            "The mix of debt and equity that maximizes the company's tax shield",
            "The mix of debt and equity that minimizes the company's cost of equity",
            "The mix of debt and equity that maximizes the company's stock price",
            "The mix of debt and equity that equals 50% debt and 50% equity",
        ],
        answer: AnswerChoice::C,
        explanation: "The optimal capital structure is the mix of debt and equity that maximizes the company's stock price (or equivalently, minimizes the WACC).",
    },
    BankQuestion {
        question: "Which dividend policy suggests that firms should pay out residual earnings after funding all profitable investment opportunities?",
        options: [
            "Stable dividend policy",
            "Constant dividend payout ratio policy",
            "Residual dividend model",
            "Fixed dividend policy",
        ],
        answer: AnswerChoice::C,
        explanation: "The residual dividend model suggests that firms should pay out residual earnings after funding all profitable investment opportunities.",
    },
];
