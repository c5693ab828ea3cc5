// ABOUTME: Display metadata for the four BMI categories
// ABOUTME: Names, hex colors, emoji, one-line descriptions, tips, and the disclaimer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BMI Calculator Contributors

/// Category labels
pub mod names {
    /// Underweight label
    pub const UNDERWEIGHT: &str = "Underweight";
    /// Normal weight label
    pub const NORMAL: &str = "Normal weight";
    /// Overweight label
    pub const OVERWEIGHT: &str = "Overweight";
    /// Obese label
    pub const OBESE: &str = "Obese";
}

/// Hex colors, stable per category
pub mod colors {
    /// Yellow
    pub const UNDERWEIGHT: &str = "#FFC300";
    /// Green
    pub const NORMAL: &str = "#2ECC71";
    /// Orange
    pub const OVERWEIGHT: &str = "#FF5733";
    /// Red
    pub const OBESE: &str = "#C70039";
}

/// Emoji indicators, stable per category
pub mod emojis {
    /// Warning sign
    pub const UNDERWEIGHT: &str = "⚠️";
    /// Check mark
    pub const NORMAL: &str = "✅";
    /// Warning sign
    pub const OVERWEIGHT: &str = "⚠️";
    /// Siren
    pub const OBESE: &str = "🚨";
}

/// One-line explanations
pub mod descriptions {
    /// Underweight
    pub const UNDERWEIGHT: &str = "Below normal weight range";
    /// Normal weight
    pub const NORMAL: &str = "Healthy weight range";
    /// Overweight
    pub const OVERWEIGHT: &str = "Above normal weight range";
    /// Obese
    pub const OBESE: &str = "Significantly above normal weight range";
}

/// Category-specific advice, markdown formatted
pub mod tips {
    /// Advice for healthy weight gain
    pub const UNDERWEIGHT: &str = "\
### Tips for Healthy Weight Gain:
- Eat more frequently throughout the day
- Choose nutrient-rich foods
- Add healthy snacks between meals
- Include protein with every meal
- Consider strength training exercises
";

    /// Advice for maintaining a healthy weight
    pub const NORMAL: &str = "\
### Tips to Maintain Healthy Weight:
- Keep up your balanced diet
- Stay physically active
- Get adequate sleep
- Stay hydrated
- Monitor your weight regularly
";

    /// Advice for weight management
    pub const OVERWEIGHT: &str = "\
### Tips for Weight Management:
- Increase physical activity
- Control portion sizes
- Choose whole foods over processed foods
- Track your daily calorie intake
- Consider consulting a nutritionist
";

    /// Advice for weight loss
    pub const OBESE: &str = "\
### Tips for Weight Loss:
- Consult with healthcare professionals
- Start with moderate exercise
- Focus on portion control
- Keep a food diary
- Set realistic goals
";
}

/// Static medical disclaimer shown with every result
pub const MEDICAL_DISCLAIMER: &str = "ℹ️ Remember: BMI is just one measure of health. \
Always consult with healthcare professionals for medical advice.";

/// Application title
pub const APP_TITLE: &str = "⚕️ Body Mass Index (BMI) Calculator";
