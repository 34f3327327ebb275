/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Request shapes, one per operation.

use crate::model::{FilterV2, Filters, HistoricalMetric, MetricV2};
use smithy_types::DateTime;

shape! {
    /// The request of the `CreateContactFlow` operation.
    "CreateContactFlowRequest" => pub struct CreateContactFlowInput {
        /// The identifier of the Amazon Connect instance.
        "InstanceId" => instance_id: string { set_instance_id, with_instance_id },
        /// The name of the flow.
        "Name" => name: string { set_name, with_name },
        /// The type of the flow. See [`ContactFlowType`](crate::model::ContactFlowType).
        "Type" => r#type: string { set_type, with_type },
        /// The description of the flow.
        "Description" => description: string { set_description, with_description },
        /// The JSON string that represents the content of the flow.
        "Content" => content: string { set_content, with_content },
        /// The tags used to organize, track, or control access for this resource.
        "Tags" => tags: map<String> { set_tags, with_tags, add_tags_entry, clear_tags_entries },
    }
}

shape! {
    /// The request of the `CreatePersistentContactAssociation` operation.
    "CreatePersistentContactAssociationRequest" => pub struct CreatePersistentContactAssociationInput {
        /// The identifier of the Amazon Connect instance.
        "InstanceId" => instance_id: string { set_instance_id, with_instance_id },
        /// This is the contactId of the current contact that the
        /// `CreatePersistentContactAssociation` API is being called from.
        "InitialContactId" => initial_contact_id: string { set_initial_contact_id, with_initial_contact_id },
        /// The contactId chosen for rehydration depends on the type chosen.
        /// See [`RehydrationType`](crate::model::RehydrationType).
        "RehydrationType" => rehydration_type: string { set_rehydration_type, with_rehydration_type },
        /// The contactId from which a persistent chat session must be started.
        "SourceContactId" => source_contact_id: string { set_source_contact_id, with_source_contact_id },
        /// A unique, case-sensitive identifier that you provide to ensure the idempotency of the request.
        "ClientToken" => client_token: string { set_client_token, with_client_token },
    }
}

shape! {
    /// The request of the `GetMetricData` operation.
    "GetMetricDataRequest" => pub struct GetMetricDataInput {
        /// The identifier of the Amazon Connect instance.
        "InstanceId" => instance_id: string { set_instance_id, with_instance_id },
        /// The timestamp, in UNIX Epoch time format, at which to start the reporting interval.
        "StartTime" => start_time: value<DateTime> { set_start_time, with_start_time },
        /// The timestamp, in UNIX Epoch time format, at which to end the reporting interval.
        "EndTime" => end_time: value<DateTime> { set_end_time, with_end_time },
        /// The queues, up to 100, or channels, to use to filter the metrics returned.
        "Filters" => filters: shape<Filters> { set_filters, with_filters },
        /// The grouping applied to the metrics returned. See [`Grouping`](crate::model::Grouping).
        "Groupings" => groupings: list<String> { set_groupings, with_groupings, append_groupings },
        /// The metrics to retrieve.
        "HistoricalMetrics" => historical_metrics: list<HistoricalMetric> {
            set_historical_metrics,
            with_historical_metrics,
            append_historical_metrics,
        },
        /// The token for the next set of results.
        "NextToken" => next_token: string { set_next_token, with_next_token },
        /// The maximum number of results to return per page.
        "MaxResults" => max_results: value<i32> { set_max_results, with_max_results },
    }
}

shape! {
    /// The request of the `GetMetricDataV2` operation.
    "GetMetricDataV2Request" => pub struct GetMetricDataV2Input {
        /// The Amazon Resource Name (ARN) of the resource, for example the instance ARN.
        "ResourceArn" => resource_arn: string { set_resource_arn, with_resource_arn },
        /// The timestamp, in UNIX Epoch time format, at which to start the reporting interval.
        "StartTime" => start_time: value<DateTime> { set_start_time, with_start_time },
        /// The timestamp, in UNIX Epoch time format, at which to end the reporting interval.
        "EndTime" => end_time: value<DateTime> { set_end_time, with_end_time },
        /// The filters to apply to returned metrics.
        "Filters" => filters: list<FilterV2> { set_filters, with_filters, append_filters },
        /// The grouping applied to the metrics that are returned.
        "Groupings" => groupings: list<String> { set_groupings, with_groupings, append_groupings },
        /// The metrics to retrieve.
        "Metrics" => metrics: list<MetricV2> { set_metrics, with_metrics, append_metrics },
        /// The token for the next set of results.
        "NextToken" => next_token: string { set_next_token, with_next_token },
        /// The maximum number of results to return per page.
        "MaxResults" => max_results: value<i32> { set_max_results, with_max_results },
    }
}

shape! {
    /// The request of the `TagResource` operation.
    "TagResourceRequest" => pub struct TagResourceInput {
        /// The Amazon Resource Name (ARN) of the resource.
        "ResourceArn" => resource_arn: string { set_resource_arn, with_resource_arn },
        /// The tags used to organize, track, or control access for this resource.
        "Tags" => tags: map<String> { set_tags, with_tags, add_tags_entry, clear_tags_entries },
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::model::{Channel, Grouping, HistoricalMetricName, Statistic, Unit};
    use pretty_assertions::assert_eq;
    use smithy_types::Shape;

    #[test]
    fn request_shapes_use_their_api_names() {
        assert_eq!(CreateContactFlowInput::NAME, "CreateContactFlowRequest");
        assert_eq!(GetMetricDataV2Input::NAME, "GetMetricDataV2Request");
        assert_eq!(TagResourceInput::MEMBERS, &["ResourceArn", "Tags"]);
    }

    #[test]
    fn get_metric_data_request() {
        let input = GetMetricDataInput::new()
            .with_instance_id("instance")
            .with_start_time(DateTime::from_secs(1_600_000_000))
            .with_filters(
                Filters::new()
                    .append_queues("q1")
                    .append_channels(Channel::Voice),
            )
            .append_groupings(Grouping::Queue)
            .append_historical_metrics(
                HistoricalMetric::new()
                    .with_name(HistoricalMetricName::ContactsHandled)
                    .with_statistic(Statistic::Sum)
                    .with_unit(Unit::Count),
            )
            .with_max_results(100);

        assert_eq!(input.max_results(), Some(100));
        assert_eq!(input.end_time(), None);
        assert_eq!(input.historical_metrics().map(<[HistoricalMetric]>::len), Some(1));
        assert_eq!(
            input.to_string(),
            "{InstanceId: instance,\
             StartTime: 2020-09-13T12:26:40Z,\
             Filters: {Queues: [q1],Channels: [VOICE]},\
             Groupings: [QUEUE],\
             HistoricalMetrics: [{Name: CONTACTS_HANDLED,Statistic: SUM,Unit: COUNT}],\
             MaxResults: 100}"
        );
    }

    #[test]
    fn tag_resource_request_rejects_repeated_tag_keys() {
        let mut input = TagResourceInput::new().with_resource_arn("arn:aws:connect:::instance/1");
        input
            .add_tags_entry("team", "blue")
            .unwrap()
            .add_tags_entry("owner", "ops")
            .unwrap();
        assert!(input.add_tags_entry("owner", "dev").is_err());
        assert_eq!(input.tags().unwrap()["owner"], "ops");
    }
}
