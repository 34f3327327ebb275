/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Resources and nested records of the Amazon Connect API.
//!
//! Every shape holds its members as `Option`s: an absent member is distinct from an empty
//! string, list or map. Enumerated members are stored as strings and accept either the
//! enumeration or any string through their `with_*` setter.

use smithy_types::DateTime;

shape_enum! {
    /// The type of a flow.
    pub enum ContactFlowType {
        #[allow(missing_docs)]
        ContactFlow => "CONTACT_FLOW",
        #[allow(missing_docs)]
        CustomerQueue => "CUSTOMER_QUEUE",
        #[allow(missing_docs)]
        CustomerHold => "CUSTOMER_HOLD",
        #[allow(missing_docs)]
        CustomerWhisper => "CUSTOMER_WHISPER",
        #[allow(missing_docs)]
        AgentHold => "AGENT_HOLD",
        #[allow(missing_docs)]
        AgentWhisper => "AGENT_WHISPER",
        #[allow(missing_docs)]
        OutboundWhisper => "OUTBOUND_WHISPER",
        #[allow(missing_docs)]
        AgentTransfer => "AGENT_TRANSFER",
        #[allow(missing_docs)]
        QueueTransfer => "QUEUE_TRANSFER",
        /// A flow used by outbound campaigns.
        Campaign => "CAMPAIGN",
    }
}

shape_enum! {
    /// Whether a flow can be used.
    pub enum ContactFlowState {
        /// The flow can be used.
        Active => "ACTIVE",
        /// The flow is archived and cannot be associated with new contacts.
        Archived => "ARCHIVED",
    }
}

shape_enum! {
    /// Publication status of a flow.
    pub enum ContactFlowStatus {
        /// The flow is published and in use.
        Published => "PUBLISHED",
        /// The flow is saved but not yet published.
        Saved => "SAVED",
    }
}

shape_enum! {
    /// Status of a contact evaluation.
    pub enum EvaluationStatus {
        #[allow(missing_docs)]
        Draft => "DRAFT",
        #[allow(missing_docs)]
        Submitted => "SUBMITTED",
    }
}

shape_enum! {
    /// Status of an attached file.
    pub enum FileStatusType {
        #[allow(missing_docs)]
        Approved => "APPROVED",
        #[allow(missing_docs)]
        Rejected => "REJECTED",
        #[allow(missing_docs)]
        Processing => "PROCESSING",
        #[allow(missing_docs)]
        Failed => "FAILED",
    }
}

shape_enum! {
    /// The use case an attached file serves.
    pub enum FileUseCaseType {
        /// The file is attached to a contact or case.
        Attachment => "ATTACHMENT",
    }
}

shape_enum! {
    /// Lifecycle state of a custom vocabulary.
    pub enum VocabularyState {
        #[allow(missing_docs)]
        CreationInProgress => "CREATION_IN_PROGRESS",
        #[allow(missing_docs)]
        Active => "ACTIVE",
        /// Creation failed; see the vocabulary's `FailureReason`.
        CreationFailed => "CREATION_FAILED",
        #[allow(missing_docs)]
        DeleteInProgress => "DELETE_IN_PROGRESS",
    }
}

shape_enum! {
    /// How a persistent chat is rehydrated from a past session.
    pub enum RehydrationType {
        /// Rehydrates the chat with the full transcript of the past session.
        EntirePastSession => "ENTIRE_PAST_SESSION",
        /// Rehydrates the chat starting at the segment named by the source contact.
        FromSegment => "FROM_SEGMENT",
    }
}

shape_enum! {
    /// Communication channel of a contact.
    pub enum Channel {
        #[allow(missing_docs)]
        Voice => "VOICE",
        #[allow(missing_docs)]
        Chat => "CHAT",
        #[allow(missing_docs)]
        Task => "TASK",
    }
}

shape_enum! {
    /// Dimension by which metric data is grouped.
    pub enum Grouping {
        #[allow(missing_docs)]
        Queue => "QUEUE",
        #[allow(missing_docs)]
        Channel => "CHANNEL",
        #[allow(missing_docs)]
        RoutingProfile => "ROUTING_PROFILE",
        #[allow(missing_docs)]
        RoutingStepExpression => "ROUTING_STEP_EXPRESSION",
    }
}

shape_enum! {
    /// Name of a historical metric.
    pub enum HistoricalMetricName {
        #[allow(missing_docs)]
        ContactsQueued => "CONTACTS_QUEUED",
        #[allow(missing_docs)]
        ContactsHandled => "CONTACTS_HANDLED",
        #[allow(missing_docs)]
        ContactsAbandoned => "CONTACTS_ABANDONED",
        #[allow(missing_docs)]
        ContactsConsulted => "CONTACTS_CONSULTED",
        #[allow(missing_docs)]
        ContactsAgentHungUpFirst => "CONTACTS_AGENT_HUNG_UP_FIRST",
        #[allow(missing_docs)]
        ContactsHandledIncoming => "CONTACTS_HANDLED_INCOMING",
        #[allow(missing_docs)]
        ContactsHandledOutbound => "CONTACTS_HANDLED_OUTBOUND",
        #[allow(missing_docs)]
        ContactsHoldAbandons => "CONTACTS_HOLD_ABANDONS",
        #[allow(missing_docs)]
        ContactsTransferredIn => "CONTACTS_TRANSFERRED_IN",
        #[allow(missing_docs)]
        ContactsTransferredOut => "CONTACTS_TRANSFERRED_OUT",
        #[allow(missing_docs)]
        ContactsTransferredInFromQueue => "CONTACTS_TRANSFERRED_IN_FROM_QUEUE",
        #[allow(missing_docs)]
        ContactsTransferredOutFromQueue => "CONTACTS_TRANSFERRED_OUT_FROM_QUEUE",
        #[allow(missing_docs)]
        ContactsMissed => "CONTACTS_MISSED",
        #[allow(missing_docs)]
        CallbackContactsHandled => "CALLBACK_CONTACTS_HANDLED",
        #[allow(missing_docs)]
        ApiContactsHandled => "API_CONTACTS_HANDLED",
        #[allow(missing_docs)]
        Occupancy => "OCCUPANCY",
        #[allow(missing_docs)]
        HandleTime => "HANDLE_TIME",
        #[allow(missing_docs)]
        AfterContactWorkTime => "AFTER_CONTACT_WORK_TIME",
        #[allow(missing_docs)]
        QueuedTime => "QUEUED_TIME",
        #[allow(missing_docs)]
        AbandonTime => "ABANDON_TIME",
        #[allow(missing_docs)]
        QueueAnswerTime => "QUEUE_ANSWER_TIME",
        #[allow(missing_docs)]
        HoldTime => "HOLD_TIME",
        #[allow(missing_docs)]
        InteractionTime => "INTERACTION_TIME",
        #[allow(missing_docs)]
        InteractionAndHoldTime => "INTERACTION_AND_HOLD_TIME",
        #[allow(missing_docs)]
        ServiceLevel => "SERVICE_LEVEL",
    }
}

shape_enum! {
    /// Statistic applied to a historical metric.
    pub enum Statistic {
        #[allow(missing_docs)]
        Sum => "SUM",
        #[allow(missing_docs)]
        Max => "MAX",
        #[allow(missing_docs)]
        Avg => "AVG",
    }
}

shape_enum! {
    /// Unit of a historical metric.
    pub enum Unit {
        #[allow(missing_docs)]
        Seconds => "SECONDS",
        #[allow(missing_docs)]
        Count => "COUNT",
        #[allow(missing_docs)]
        Percent => "PERCENT",
    }
}

shape_enum! {
    /// Comparison operator of a metric threshold.
    pub enum Comparison {
        /// Less than.
        Lt => "LT",
    }
}

shape! {
    /// Contains information about a flow.
    "ContactFlow" => pub struct ContactFlow {
        /// The Amazon Resource Name (ARN) of the flow.
        "Arn" => arn: string { set_arn, with_arn },
        /// The identifier of the flow.
        "Id" => id: string { set_id, with_id },
        /// The name of the flow.
        "Name" => name: string { set_name, with_name },
        /// The type of the flow. See [`ContactFlowType`] for the known values.
        "Type" => r#type: string { set_type, with_type },
        /// The state of the flow. See [`ContactFlowState`].
        "State" => state: string { set_state, with_state },
        /// The status of the flow. See [`ContactFlowStatus`].
        "Status" => status: string { set_status, with_status },
        /// The description of the flow.
        "Description" => description: string { set_description, with_description },
        /// The JSON string that represents the content of the flow.
        ///
        /// The value is opaque to this crate and is never parsed.
        "Content" => content: string { set_content, with_content },
        /// The tags used to organize, track, or control access for this resource.
        "Tags" => tags: map<String> { set_tags, with_tags, add_tags_entry, clear_tags_entries },
    }
}

shape! {
    /// Metadata about a contact evaluation.
    "EvaluationMetadata" => pub struct EvaluationMetadata {
        /// The identifier of the contact in this instance of Amazon Connect.
        "ContactId" => contact_id: string { set_contact_id, with_contact_id },
        /// The Amazon Resource Name (ARN) of the user who last updated the evaluation.
        "EvaluatorArn" => evaluator_arn: string { set_evaluator_arn, with_evaluator_arn },
        /// The identifier of the agent who performed the contact.
        "ContactAgentId" => contact_agent_id: string { set_contact_agent_id, with_contact_agent_id },
        /// The overall evaluation score.
        "Score" => score: shape<EvaluationScore> { set_score, with_score },
    }
}

shape! {
    /// The value of an answer in a contact evaluation. At most one member is expected to be set.
    "EvaluationAnswerData" => pub struct EvaluationAnswerData {
        /// The string value for an answer.
        "StringValue" => string_value: string { set_string_value, with_string_value },
        /// The numeric value for an answer.
        "NumericValue" => numeric_value: value<f64> { set_numeric_value, with_numeric_value },
        /// The flag to mark the question as not applicable.
        "NotApplicable" => not_applicable: value<bool> { set_not_applicable, with_not_applicable },
    }
}

shape! {
    /// An answer of a contact evaluation.
    "EvaluationAnswerOutput" => pub struct EvaluationAnswerOutput {
        /// The value for an answer.
        "Value" => value: shape<EvaluationAnswerData> { set_value, with_value },
        /// The system suggested value for an answer.
        "SystemSuggestedValue" => system_suggested_value: shape<EvaluationAnswerData> {
            set_system_suggested_value,
            with_system_suggested_value,
        },
    }
}

shape! {
    /// A free-form note in a contact evaluation.
    "EvaluationNote" => pub struct EvaluationNote {
        /// The note for an item (section or question).
        "Value" => value: string { set_value, with_value },
    }
}

shape! {
    /// A score of a contact evaluation, for the whole evaluation or one of its items.
    "EvaluationScore" => pub struct EvaluationScore {
        /// The score percentage for an item.
        "Percentage" => percentage: value<f64> { set_percentage, with_percentage },
        /// The flag to mark the item as not applicable for scoring.
        "NotApplicable" => not_applicable: value<bool> { set_not_applicable, with_not_applicable },
        /// The flag that marks the item as automatic fail.
        ///
        /// If the item or a child item gets an automatic fail answer, this flag is true.
        "AutomaticFail" => automatic_fail: value<bool> { set_automatic_fail, with_automatic_fail },
    }
}

shape! {
    /// Information about a contact evaluation.
    "Evaluation" => pub struct Evaluation {
        /// A unique identifier for the contact evaluation.
        "EvaluationId" => evaluation_id: string { set_evaluation_id, with_evaluation_id },
        /// The Amazon Resource Name (ARN) for the contact evaluation resource.
        "EvaluationArn" => evaluation_arn: string { set_evaluation_arn, with_evaluation_arn },
        /// Metadata about the contact evaluation.
        "Metadata" => metadata: shape<EvaluationMetadata> { set_metadata, with_metadata },
        /// A map of question identifiers to answer value.
        "Answers" => answers: map<EvaluationAnswerOutput> {
            set_answers,
            with_answers,
            add_answers_entry,
            clear_answers_entries,
        },
        /// A map of question identifiers to note value.
        "Notes" => notes: map<EvaluationNote> { set_notes, with_notes, add_notes_entry, clear_notes_entries },
        /// The status of the contact evaluation. See [`EvaluationStatus`].
        "Status" => status: string { set_status, with_status },
        /// A map of item (section or question) identifiers to score value.
        "Scores" => scores: map<EvaluationScore> { set_scores, with_scores, add_scores_entry, clear_scores_entries },
        /// The timestamp for when the evaluation was created.
        "CreatedTime" => created_time: value<DateTime> { set_created_time, with_created_time },
        /// The timestamp for when the evaluation was last updated.
        "LastModifiedTime" => last_modified_time: value<DateTime> { set_last_modified_time, with_last_modified_time },
        /// The tags used to organize, track, or control access for this resource.
        "Tags" => tags: map<String> { set_tags, with_tags, add_tags_entry, clear_tags_entries },
    }
}

shape! {
    /// Contains information about a security profile.
    "SecurityProfile" => pub struct SecurityProfile {
        /// The identifier for the security profile.
        "Id" => id: string { set_id, with_id },
        /// The organization resource identifier for the security profile.
        "OrganizationResourceId" => organization_resource_id: string {
            set_organization_resource_id,
            with_organization_resource_id,
        },
        /// The Amazon Resource Name (ARN) for the security profile.
        "Arn" => arn: string { set_arn, with_arn },
        /// The name for the security profile.
        "SecurityProfileName" => security_profile_name: string { set_security_profile_name, with_security_profile_name },
        /// The description of the security profile.
        "Description" => description: string { set_description, with_description },
        /// The tags used to organize, track, or control access for this resource.
        "Tags" => tags: map<String> { set_tags, with_tags, add_tags_entry, clear_tags_entries },
        /// The list of tags that a security profile uses to restrict access to resources in Amazon Connect.
        "AllowedAccessControlTags" => allowed_access_control_tags: map<String> {
            set_allowed_access_control_tags,
            with_allowed_access_control_tags,
            add_allowed_access_control_tags_entry,
            clear_allowed_access_control_tags_entries,
        },
        /// The list of resources that a security profile applies tag restrictions to in Amazon Connect.
        "TagRestrictedResources" => tag_restricted_resources: list<String> {
            set_tag_restricted_resources,
            with_tag_restricted_resources,
            append_tag_restricted_resources,
        },
        /// The timestamp when this resource was last modified.
        "LastModifiedTime" => last_modified_time: value<DateTime> { set_last_modified_time, with_last_modified_time },
        /// The Amazon Web Services Region where this resource was last modified.
        "LastModifiedRegion" => last_modified_region: string { set_last_modified_region, with_last_modified_region },
    }
}

shape! {
    /// Contains information about a custom vocabulary.
    "Vocabulary" => pub struct Vocabulary {
        /// A unique name of the custom vocabulary.
        "Name" => name: string { set_name, with_name },
        /// The identifier of the custom vocabulary.
        "Id" => id: string { set_id, with_id },
        /// The Amazon Resource Name (ARN) of the custom vocabulary.
        "Arn" => arn: string { set_arn, with_arn },
        /// The language code of the vocabulary entries, e.g. `en-US`.
        "LanguageCode" => language_code: string { set_language_code, with_language_code },
        /// The current state of the custom vocabulary. See [`VocabularyState`].
        "State" => state: string { set_state, with_state },
        /// The timestamp when the custom vocabulary was last modified.
        "LastModifiedTime" => last_modified_time: value<DateTime> { set_last_modified_time, with_last_modified_time },
        /// The reason why the custom vocabulary was not created.
        "FailureReason" => failure_reason: string { set_failure_reason, with_failure_reason },
        /// The content of the custom vocabulary in plain-text format with a table of values.
        "Content" => content: string { set_content, with_content },
        /// The tags used to organize, track, or control access for this resource.
        "Tags" => tags: map<String> { set_tags, with_tags, add_tags_entry, clear_tags_entries },
    }
}

shape! {
    /// Information on the identity that created the file.
    "CreatedByInfo" => pub struct CreatedByInfo {
        /// An agent ARN representing a connect user.
        "ConnectUserArn" => connect_user_arn: string { set_connect_user_arn, with_connect_user_arn },
        /// STS or IAM ARN representing the identity of API Caller.
        "AWSIdentityArn" => aws_identity_arn: string { set_aws_identity_arn, with_aws_identity_arn },
    }
}

shape! {
    /// Information about an attached file.
    "AttachedFile" => pub struct AttachedFile {
        /// The time of Creation of the file resource as an ISO timestamp.
        ///
        /// It's specified in ISO 8601 format: `yyyy-MM-ddThh:mm:ss.SSSZ`, and kept verbatim.
        "CreationTime" => creation_time: string { set_creation_time, with_creation_time },
        /// The unique identifier of the attached file resource (ARN).
        "FileArn" => file_arn: string { set_file_arn, with_file_arn },
        /// The unique identifier of the attached file resource.
        "FileId" => file_id: string { set_file_id, with_file_id },
        /// A case-sensitive name of the attached file being uploaded.
        "FileName" => file_name: string { set_file_name, with_file_name },
        /// The size of the attached file in bytes.
        "FileSizeInBytes" => file_size_in_bytes: value<i64> { set_file_size_in_bytes, with_file_size_in_bytes },
        /// The current status of the attached file. See [`FileStatusType`].
        "FileStatus" => file_status: string { set_file_status, with_file_status },
        /// Represents the identity that created the file.
        "CreatedBy" => created_by: shape<CreatedByInfo> { set_created_by, with_created_by },
        /// The use case for the file. See [`FileUseCaseType`].
        "FileUseCaseType" => file_use_case_type: string { set_file_use_case_type, with_file_use_case_type },
        /// The resource to which the attached file is (being) uploaded to.
        "AssociatedResourceArn" => associated_resource_arn: string {
            set_associated_resource_arn,
            with_associated_resource_arn,
        },
        /// The tags used to organize, track, or control access for this resource.
        "Tags" => tags: map<String> { set_tags, with_tags, add_tags_entry, clear_tags_entries },
    }
}

shape! {
    /// Contains the filter to apply when retrieving metrics.
    "Filters" => pub struct Filters {
        /// The queues to use to filter the metrics. You should specify at least one queue.
        "Queues" => queues: list<String> { set_queues, with_queues, append_queues },
        /// The channel to use to filter the metrics. See [`Channel`].
        "Channels" => channels: list<String> { set_channels, with_channels, append_channels },
        /// A list of up to 100 routing profile IDs or ARNs.
        "RoutingProfiles" => routing_profiles: list<String> {
            set_routing_profiles,
            with_routing_profiles,
            append_routing_profiles,
        },
        /// A list of expressions as a filter, in which an expression is an object of a step in a routing criteria.
        "RoutingStepExpressions" => routing_step_expressions: list<String> {
            set_routing_step_expressions,
            with_routing_step_expressions,
            append_routing_step_expressions,
        },
    }
}

shape! {
    /// Contains information about the threshold for service level metrics.
    "Threshold" => pub struct Threshold {
        /// The type of comparison. Only "less than" (LT) comparisons are supported.
        "Comparison" => comparison: string { set_comparison, with_comparison },
        /// The threshold value to compare.
        "ThresholdValue" => threshold_value: value<f64> { set_threshold_value, with_threshold_value },
    }
}

shape! {
    /// Contains information about a historical metric.
    "HistoricalMetric" => pub struct HistoricalMetric {
        /// The name of the metric. See [`HistoricalMetricName`].
        "Name" => name: string { set_name, with_name },
        /// The threshold for the metric, used with service level metrics.
        "Threshold" => threshold: shape<Threshold> { set_threshold, with_threshold },
        /// The statistic for the metric. See [`Statistic`].
        "Statistic" => statistic: string { set_statistic, with_statistic },
        /// The unit for the metric. See [`Unit`].
        "Unit" => unit: string { set_unit, with_unit },
    }
}

shape! {
    /// Contains the filter to apply when retrieving metrics with the v2 API.
    "FilterV2" => pub struct FilterV2 {
        /// The key to use for filtering data, e.g. `QUEUE` or `ROUTING_PROFILE`.
        "FilterKey" => filter_key: string { set_filter_key, with_filter_key },
        /// The identifiers to use for filtering data.
        "FilterValues" => filter_values: list<String> { set_filter_values, with_filter_values, append_filter_values },
    }
}

shape! {
    /// Contains information about the threshold for service level metrics.
    "ThresholdV2" => pub struct ThresholdV2 {
        /// The type of comparison. Currently, "less than" (LT) and "greater than" (GT) comparisons are supported.
        "Comparison" => comparison: string { set_comparison, with_comparison },
        /// The threshold value to compare.
        "ThresholdValue" => threshold_value: value<f64> { set_threshold_value, with_threshold_value },
    }
}

shape! {
    /// Contains information about the filter used when retrieving metrics.
    "MetricFilterV2" => pub struct MetricFilterV2 {
        /// The key to use for filtering data.
        "MetricFilterKey" => metric_filter_key: string { set_metric_filter_key, with_metric_filter_key },
        /// The values to use for filtering data.
        "MetricFilterValues" => metric_filter_values: list<String> {
            set_metric_filter_values,
            with_metric_filter_values,
            append_metric_filter_values,
        },
        /// The flag to use to filter on requested metric filter values or to not filter on requested metric filter values.
        "Negate" => negate: value<bool> { set_negate, with_negate },
    }
}

shape! {
    /// Contains information about the metric.
    "MetricV2" => pub struct MetricV2 {
        /// The name of the metric.
        "Name" => name: string { set_name, with_name },
        /// Contains information about the threshold for service level metrics.
        "Threshold" => threshold: list<ThresholdV2> { set_threshold, with_threshold, append_threshold },
        /// Contains the filters to be used when returning data.
        "MetricFilters" => metric_filters: list<MetricFilterV2> {
            set_metric_filters,
            with_metric_filters,
            append_metric_filters,
        },
    }
}
