//! Tutor explanations for every topic at every level.

use crate::model::{Level, Topic};

/// A static tutor explanation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExplanationEntry {
    pub title: &'static str,
    pub explanation: &'static str,
    pub real_world_example: &'static str,
    pub key_points: &'static [&'static str],
}

#[must_use]
pub fn explanation_for(topic: Topic, level: Level) -> Option<&'static ExplanationEntry> {
    let entries = match topic {
        Topic::Ethics => &ETHICS,
        Topic::QuantitativeMethods => &QUANTITATIVE_METHODS,
        Topic::Economics => &ECONOMICS,
        Topic::FinancialReportingAndAnalysis => &FINANCIAL_REPORTING_AND_ANALYSIS,
        Topic::CorporateFinance => &CORPORATE_FINANCE,
        Topic::EquityInvestments => &EQUITY_INVESTMENTS,
        Topic::FixedIncome => &FIXED_INCOME,
        Topic::Derivatives => &DERIVATIVES,
        Topic::AlternativeInvestments => &ALTERNATIVE_INVESTMENTS,
        Topic::PortfolioManagement => &PORTFOLIO_MANAGEMENT,
    };
    entries.get(usize::from(level.number()) - 1)
}

static ETHICS: [ExplanationEntry; 3] = [
    ExplanationEntry {
        title: "Ethics and Professional Standards (Level I)",
        explanation: "Ethics forms the foundation of investment practice. At Level I, focus on understanding the CFA Institute Code of Ethics and Standards of Professional Conduct. Key concepts include: loyalty, prudence, and care; fair dealing; suitability; and responsibility of supervisors.",
        real_world_example: "Consider the case of a portfolio manager who recommends a fund to clients without fully disclosing the potential conflicts of interest. This violates Standard VI(B) - Priority of Transactions and Standard I(D) - Misconduct.",
        key_points: &[
            "Understand the six major standards",
            "Know how to apply them to scenarios",
            "Recognize violations and proper procedures",
        ],
    },
    ExplanationEntry {
        title: "Ethics in Asset Management Context (Level II)",
        explanation: "At Level II, ethics is integrated into each vignette. You'll encounter ethical dilemmas within the context of specific investments and client situations. The focus shifts from knowing standards to applying them.",
        real_world_example: "An analyst discovers material non-public information about a company. While this doesn't directly affect the analysis, the ethical implications of trading on or sharing this information are significant.",
        key_points: &[
            "Apply ethical standards to complex scenarios",
            "Identify ethical issues in case studies",
            "Recommend appropriate actions based on standards",
        ],
    },
    ExplanationEntry {
        title: "Ethical and Professional Considerations (Level III)",
        explanation: "At Level III, ethics involves portfolio management and wealth planning decisions. Candidates must consider the ethical implications of investment strategies and client relationships.",
        real_world_example: "A wealth advisor must balance the needs of multiple beneficiaries in an estate plan, considering both legal requirements and ethical obligations to each party.",
        key_points: &[
            "Evaluate ethical considerations in portfolio decisions",
            "Address conflicts of interest in wealth planning",
            "Integrate ethics into investment policy statements",
        ],
    },
];

static QUANTITATIVE_METHODS: [ExplanationEntry; 3] = [
    ExplanationEntry {
        title: "Quantitative Methods (Level I)",
        explanation: "Quantitative Methods provides the mathematical foundation for investment analysis. Topics include time value of money, statistical concepts, probability distributions, and hypothesis testing.",
        real_world_example: "An investor calculates the present value of future cash flows to determine whether a bond investment is attractive at its current price.",
        key_points: &[
            "Understand basic statistical measures (mean, median, mode)",
            "Calculate probabilities and interpret distributions",
            "Perform hypothesis tests",
        ],
    },
    ExplanationEntry {
        title: "Quantitative Applications in Valuation (Level II)",
        explanation: "At Level II, quantitative methods are applied to valuation models. Correlation and regression analysis are used to understand relationships between variables affecting asset prices.",
        real_world_example: "An analyst uses regression analysis to determine how changes in interest rates affect bond prices, helping predict portfolio performance under different economic scenarios.",
        key_points: &[
            "Apply correlation and regression to investment problems",
            "Use probability concepts in valuation",
            "Interpret statistical significance in financial contexts",
        ],
    },
    ExplanationEntry {
        title: "Quantitative Methods in Portfolio Management (Level III)",
        explanation: "At Level III, quantitative methods support portfolio construction and risk management. Techniques include Monte Carlo simulation and factor modeling.",
        real_world_example: "A portfolio manager uses Monte Carlo simulation to model potential portfolio outcomes under various market conditions to optimize asset allocation.",
        key_points: &[
            "Apply advanced quantitative techniques to portfolio decisions",
            "Model risk and return scenarios",
            "Evaluate portfolio performance using quantitative methods",
        ],
    },
];

static ECONOMICS: [ExplanationEntry; 3] = [
    ExplanationEntry {
        title: "Economic Analysis (Level I)",
        explanation: "Economics covers microeconomic and macroeconomic principles. Micro focuses on supply and demand, market structures, and consumer choice theory. Macroeconomics covers business cycles, monetary/fiscal policy, and international trade.",
        real_world_example: "When central banks raise interest rates, it affects currency values, inflation expectations, and investment decisions across global markets.",
        key_points: &[
            "Understand supply and demand dynamics",
            "Recognize phases of business cycle",
            "Analyze impact of monetary and fiscal policy",
        ],
    },
    ExplanationEntry {
        title: "Economic Analysis Applied to Equity and Fixed Income (Level II)",
        explanation: "At Level II, economic analysis is applied to forecasting market movements and understanding sector rotation. Economic indicators help predict equity and fixed income performance.",
        real_world_example: "Rising unemployment claims signal economic weakness, potentially leading to lower interest rates, which increases bond prices and favors defensive equity sectors.",
        key_points: &[
            "Link economic indicators to asset classes",
            "Forecast market movements based on economic trends",
            "Apply economic analysis to security selection",
        ],
    },
    ExplanationEntry {
        title: "Economic Considerations in Portfolio Management (Level III)",
        explanation: "At Level III, economic factors influence strategic asset allocation and tactical adjustments. Currency considerations become critical in global portfolios.",
        real_world_example: "A pension fund adjusts its asset allocation based on demographic trends, economic growth projections, and changing interest rate environments.",
        key_points: &[
            "Integrate economic outlook into asset allocation",
            "Assess currency risks in global portfolios",
            "Adjust strategy based on economic cycle position",
        ],
    },
];

static FINANCIAL_REPORTING_AND_ANALYSIS: [ExplanationEntry; 3] = [
    ExplanationEntry {
        title: "Financial Statement Analysis (Level I)",
        explanation: "FSA introduces the three primary financial statements: income statement, balance sheet, and cash flow statement. Understanding accounting principles and ratios is crucial for analyzing company performance.",
        real_world_example: "An investor compares two companies in the same industry using ROE, debt-to-equity ratio, and current ratio to determine which has stronger fundamentals.",
        key_points: &[
            "Understand the structure of financial statements",
            "Calculate and interpret key financial ratios",
            "Recognize differences between accounting standards (IFRS vs. US GAAP)",
        ],
    },
    ExplanationEntry {
        title: "Advanced Financial Statement Analysis (Level II)",
        explanation: "At Level II, focus on understanding footnotes, alternative accounting treatments, and how different accounting choices affect ratios and comparisons.",
        real_world_example: "An analyst evaluates the impact of a company's change from FIFO to LIFO inventory accounting on profitability metrics and tax liability during inflationary periods.",
        key_points: &[
            "Analyze complex accounting treatments",
            "Adjust financial statements for comparison",
            "Understand the impact of accounting choices on ratios",
        ],
    },
    ExplanationEntry {
        title: "Financial Statement Analysis in Portfolio Decisions (Level III)",
        explanation: "At Level III, FSA supports equity selection and credit analysis within portfolio management frameworks.",
        real_world_example: "A credit analyst evaluates a company's ability to service debt obligations by analyzing cash flow patterns, leverage ratios, and quality of earnings.",
        key_points: &[
            "Apply FSA to investment decisions",
            "Evaluate credit risk using financial statements",
            "Assess earnings quality in equity analysis",
        ],
    },
];

static CORPORATE_FINANCE: [ExplanationEntry; 3] = [
    ExplanationEntry {
        title: "Corporate Finance (Level I)",
        explanation: "Corporate Finance covers capital budgeting, cost of capital, and working capital management. Understanding NPV, IRR, and payback period is essential for evaluating investment projects.",
        real_world_example: "A company evaluates whether to invest in new manufacturing equipment by calculating the NPV of expected cash flows over the equipment's useful life.",
        key_points: &[
            "Calculate NPV, IRR, and payback period",
            "Determine weighted average cost of capital",
            "Manage working capital efficiently",
        ],
    },
    ExplanationEntry {
        title: "Capital Budgeting and Corporate Strategy (Level II)",
        explanation: "At Level II, corporate finance concepts are applied to valuation models. Capital structure decisions and dividend policies affect firm value.",
        real_world_example: "An analyst assesses how a company's decision to increase leverage affects its cost of capital and ultimately shareholder value.",
        key_points: &[
            "Apply capital budgeting to valuation",
            "Analyze capital structure decisions",
            "Evaluate dividend and share repurchase policies",
        ],
    },
    ExplanationEntry {
        title: "Corporate Finance in Portfolio Management (Level III)",
        explanation: "At Level III, corporate finance principles inform equity investment decisions and ESG considerations in portfolio construction.",
        real_world_example: "An ESG-focused fund evaluates companies based on governance practices, capital allocation efficiency, and long-term value creation.",
        key_points: &[
            "Evaluate corporate governance in investment decisions",
            "Assess capital allocation effectiveness",
            "Integrate ESG factors in equity analysis",
        ],
    },
];

static EQUITY_INVESTMENTS: [ExplanationEntry; 3] = [
    ExplanationEntry {
        title: "Equity Investments (Level I)",
        explanation: "Equity Investments covers securities markets, market organization, and security valuation principles. Understanding market efficiency and behavioral finance concepts is important.",
        real_world_example: "An investor chooses between actively managed funds and passive index funds based on beliefs about market efficiency and costs.",
        key_points: &[
            "Understand market structures and mechanisms",
            "Recognize different types of orders and costs",
            "Distinguish between efficient and inefficient markets",
        ],
    },
    ExplanationEntry {
        title: "Equity Valuation (Level II)",
        explanation: "At Level II, focus on equity valuation models including dividend discount models, free cash flow models, and relative valuation approaches.",
        real_world_example: "An analyst uses a two-stage dividend discount model to value a mature utility stock with predictable dividend growth.",
        key_points: &[
            "Apply various equity valuation models",
            "Calculate and interpret price multiples",
            "Understand growth models and their applications",
        ],
    },
    ExplanationEntry {
        title: "Equity Portfolio Management (Level III)",
        explanation: "At Level III, equity concepts support portfolio construction, rebalancing decisions, and implementation strategies.",
        real_world_example: "A portfolio manager constructs an equity portfolio with specific factor exposures (value, size, momentum) to achieve desired risk-return characteristics.",
        key_points: &[
            "Construct equity portfolios based on investment objectives",
            "Implement equity strategies effectively",
            "Monitor and rebalance equity portfolios",
        ],
    },
];

static FIXED_INCOME: [ExplanationEntry; 3] = [
    ExplanationEntry {
        title: "Fixed Income (Level I)",
        explanation: "Fixed Income covers basic bond concepts including pricing, yield measures, and risk factors. Understanding duration and convexity is crucial for bond analysis.",
        real_world_example: "An investor evaluates bonds with different maturities and coupons to select those offering the best risk-adjusted returns given expected interest rate movements.",
        key_points: &[
            "Calculate bond prices and yields",
            "Understand interest rate risk and duration",
            "Recognize different types of bonds and their features",
        ],
    },
    ExplanationEntry {
        title: "Fixed Income Valuation (Level II)",
        explanation: "At Level II, focus on yield spreads, term structure of interest rates, and credit analysis. Mortgage-backed securities and their complexities are introduced.",
        real_world_example: "An analyst evaluates mortgage-backed securities considering prepayment risk and how changes in interest rates affect cash flows.",
        key_points: &[
            "Analyze yield spreads and credit risk",
            "Understand term structure theories",
            "Evaluate complex fixed income securities",
        ],
    },
    ExplanationEntry {
        title: "Fixed Income Portfolio Management (Level III)",
        explanation: "At Level III, fixed income concepts support asset allocation, liability-driven investing, and risk management strategies.",
        real_world_example: "A pension fund uses immunization strategies to match asset and liability durations, reducing interest rate risk.",
        key_points: &[
            "Construct fixed income portfolios for specific objectives",
            "Implement immunization and hedging strategies",
            "Manage credit and interest rate risks",
        ],
    },
];

static DERIVATIVES: [ExplanationEntry; 3] = [
    ExplanationEntry {
        title: "Derivatives (Level I)",
        explanation: "Derivatives introduces forwards, futures, options, and swaps. Understanding the basic characteristics and uses of each instrument is important.",
        real_world_example: "An investor uses put options to hedge against potential losses in a stock portfolio while maintaining upside participation.",
        key_points: &[
            "Understand basic derivative instruments",
            "Recognize uses of derivatives (hedging, speculation)",
            "Calculate payoffs for basic derivative positions",
        ],
    },
    ExplanationEntry {
        title: "Derivative Valuation (Level II)",
        explanation: "At Level II, focus on derivative pricing models including binomial trees and Black-Scholes-Merton model. Arbitrage concepts are emphasized.",
        real_world_example: "An analyst calculates the theoretical value of an option using the Black-Scholes model and identifies arbitrage opportunities if market prices deviate significantly.",
        key_points: &[
            "Apply derivative pricing models",
            "Understand arbitrage relationships",
            "Calculate implied volatility and Greeks",
        ],
    },
    ExplanationEntry {
        title: "Derivatives in Portfolio Management (Level III)",
        explanation: "At Level III, derivatives support portfolio implementation, risk management, and alternative beta strategies.",
        real_world_example: "A portfolio manager uses equity index futures to gain market exposure quickly while maintaining cash for individual security purchases.",
        key_points: &[
            "Implement portfolio strategies with derivatives",
            "Manage risk using derivatives",
            "Create synthetic positions with derivatives",
        ],
    },
];

static ALTERNATIVE_INVESTMENTS: [ExplanationEntry; 3] = [
    ExplanationEntry {
        title: "Alternative Investments (Level I)",
        explanation: "Alternative Investments covers real estate, commodities, hedge funds, and private equity. Understanding the characteristics and risk-return profiles of alternatives is important.",
        real_world_example: "An institutional investor allocates part of portfolio to real estate investment trusts (REITs) for diversification and inflation protection.",
        key_points: &[
            "Recognize different alternative investment categories",
            "Understand benefits and risks of alternatives",
            "Calculate returns for alternative investments",
        ],
    },
    ExplanationEntry {
        title: "Alternative Investment Strategies (Level II)",
        explanation: "At Level II, focus on due diligence for alternative investments and understanding the unique characteristics of each category.",
        real_world_example: "An allocator evaluates a hedge fund's strategy, fees, and risk factors to determine its appropriateness for a diversified portfolio.",
        key_points: &[
            "Conduct due diligence on alternative investments",
            "Evaluate alternative investment strategies",
            "Understand fee structures and their impacts",
        ],
    },
    ExplanationEntry {
        title: "Alternative Investments in Portfolio Construction (Level III)",
        explanation: "At Level III, alternatives are integrated into asset allocation and liability-driven investing strategies.",
        real_world_example: "A pension fund incorporates commodities and REITs into its strategic asset allocation to improve diversification and inflation hedging.",
        key_points: &[
            "Integrate alternatives into asset allocation",
            "Evaluate alternatives for specific portfolio objectives",
            "Assess liquidity and operational risks",
        ],
    },
];

static PORTFOLIO_MANAGEMENT: [ExplanationEntry; 3] = [
    ExplanationEntry {
        title: "Portfolio Management Concepts (Level I)",
        explanation: "Portfolio Management introduces modern portfolio theory, risk and return concepts, and the importance of diversification. Understanding the efficient frontier is fundamental.",
        real_world_example: "An investor builds a diversified portfolio of stocks and bonds to reduce risk while achieving target returns, based on correlation between assets.",
        key_points: &[
            "Understand risk and return relationships",
            "Recognize benefits of diversification",
            "Apply modern portfolio theory concepts",
        ],
    },
    ExplanationEntry {
        title: "Portfolio Management Applications (Level II)",
        explanation: "At Level II, portfolio concepts are applied to security selection and market efficiency. Behavioral aspects of portfolio management are introduced.",
        real_world_example: "An analyst evaluates active versus passive investment strategies considering market efficiency and implementation costs.",
        key_points: &[
            "Apply portfolio theory to security analysis",
            "Evaluate market efficiency implications",
            "Consider behavioral factors in investing",
        ],
    },
    ExplanationEntry {
        title: "Integrated Portfolio Management (Level III)",
        explanation: "At Level III, portfolio management encompasses the complete investment process from policy statement through implementation and monitoring.",
        real_world_example: "A wealth advisor develops an investment policy statement for a client considering risk tolerance, constraints, and objectives, then implements and monitors the portfolio.",
        key_points: &[
            "Develop comprehensive investment policy statements",
            "Implement portfolio strategies effectively",
            "Monitor and rebalance portfolios regularly",
        ],
    },
];
